//! Poke Game Rules MCP Server
//!
//! A Model Context Protocol server over stdio that exposes the progression
//! rules: Pokedex draws, HP refills, experience awards and Pokedex lookups.
//! Stdout carries the protocol, so all logging goes to stderr.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use poke_game_rules::mcp_interface::*;
use poke_game_rules::{PokeGameError, PokeGameRuleEngine, Pokedex};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};

/// Environment variable naming an alternative Pokedex JSON file
const POKEDEX_PATH_ENV: &str = "POKE_GAME_POKEDEX_PATH";

#[derive(Debug, Clone)]
pub struct PokeGameRulesService {
    tool_router: ToolRouter<PokeGameRulesService>,
    engine: Arc<PokeGameRuleEngine>,
    pokedex: Arc<Pokedex>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DrawRequest {
    #[serde(default)]
    #[schemars(description = "Draw from the legendary range instead of the standard one")]
    pub legendary: bool,
    #[schemars(description = "How many numbers to draw (default 1)")]
    pub count: Option<u8>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RefillHpRequest {
    #[schemars(description = "Pokedex number of the Pokemon")]
    pub pokedex_number: u16,
    #[schemars(description = "Level of the Pokemon (1-100)")]
    pub level: u8,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddExperienceRequest {
    #[schemars(description = "Pokedex number of the Pokemon")]
    pub pokedex_number: u16,
    #[schemars(description = "Current level of the Pokemon (1-100)")]
    pub level: u8,
    #[serde(default)]
    #[schemars(description = "Experience already banked toward the next level")]
    pub current_experience: u32,
    #[schemars(description = "Experience to award")]
    pub xp_to_add: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Pokedex number or name of the Pokemon to look up")]
    pub query: String,
}

fn invalid_params(error: PokeGameError) -> McpError {
    McpError {
        code: ErrorCode(-32602),
        message: Cow::from(error.to_string()),
        data: None,
    }
}

#[tool_router]
impl PokeGameRulesService {
    pub fn new(engine: PokeGameRuleEngine, pokedex: Pokedex) -> Self {
        Self {
            tool_router: Self::tool_router(),
            engine: Arc::new(engine),
            pokedex: Arc::new(pokedex),
        }
    }

    #[tool(description = "Draw random Pokedex numbers from the standard or legendary range")]
    async fn draw_pokedex_number(
        &self,
        Parameters(request): Parameters<DrawRequest>,
    ) -> Result<CallToolResult, McpError> {
        let count = request.count.unwrap_or(1).max(1) as usize;
        let text = handle_draw_command(
            &self.engine,
            &self.pokedex,
            &mut rand::rng(),
            request.legendary,
            count,
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Compute the full HP of a Pokemon at a level")]
    async fn refill_hp(
        &self,
        Parameters(request): Parameters<RefillHpRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_hp_command(
            &self.engine,
            &self.pokedex,
            request.pokedex_number,
            request.level,
        )
        .map_err(invalid_params)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Award experience to a Pokemon and report its new level, XP and HP")]
    async fn add_experience(
        &self,
        Parameters(request): Parameters<AddExperienceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_xp_command(
            &self.engine,
            &self.pokedex,
            request.pokedex_number,
            request.level,
            request.current_experience,
            request.xp_to_add,
        )
        .map_err(invalid_params)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up a Pokemon's typing and base stats by number or name")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_lookup_pokemon_command(&self.pokedex, &request.query);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PokeGameRulesService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let pokedex_path = std::env::var_os(POKEDEX_PATH_ENV).map(PathBuf::from);
    let (engine, pokedex) = load_rules_context(None, pokedex_path.as_deref())?;
    tracing::info!(
        standard = engine.standard_pool().len(),
        legendary = engine.legendary_pool().len(),
        "Poke Game Rules MCP server starting"
    );

    let service = PokeGameRulesService::new(engine, pokedex);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!(?quit_reason, "Poke Game Rules MCP server exiting");
    Ok(())
}
