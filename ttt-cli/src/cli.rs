//! 命令行参数

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ttt_ai::{Agent, AiConfig, Expansion};
use ttt_rules::Piece;

use crate::config::load_config;

/// 井字棋人机对弈
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(version, about = "Play tic-tac-toe against a minimax agent", long_about = None)]
pub struct Cli {
    /// 随机种子（决定 AI 执子方，便于复现）
    #[arg(long)]
    pub seed: Option<u64>,

    /// 指定 AI 执子方 (x 或 o)，优先于 --seed
    #[arg(long)]
    pub piece: Option<Piece>,

    /// AI 配置文件 (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 极小层展开对方棋子，而不是自我对弈近似
    #[arg(long)]
    pub two_player: bool,
}

impl Cli {
    /// 根据参数构建 AI
    pub fn build_agent(&self) -> Result<Agent> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AiConfig::default(),
        };
        if self.two_player {
            config.expansion = Expansion::Alternating;
        }

        let agent = match (self.piece, self.seed) {
            (Some(piece), _) => Agent::with_piece(piece),
            (None, Some(seed)) => Agent::from_seed(seed),
            (None, None) => Agent::new(),
        };

        Ok(agent.with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["ttt"]).unwrap();
        assert!(cli.seed.is_none());
        assert!(cli.piece.is_none());
        assert!(!cli.two_player);

        let agent = cli.build_agent().unwrap();
        assert_eq!(agent.engine().config(), &AiConfig::default());
    }

    #[test]
    fn test_piece_overrides_seed() {
        let cli = Cli::try_parse_from(["ttt", "--piece", "o", "--seed", "7"]).unwrap();
        assert_eq!(cli.build_agent().unwrap().my_piece(), Piece::O);
    }

    #[test]
    fn test_seed_reproducible() {
        let cli = Cli::try_parse_from(["ttt", "--seed", "42"]).unwrap();
        let first = cli.build_agent().unwrap().my_piece();
        let second = cli.build_agent().unwrap().my_piece();
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_player_flag() {
        let cli = Cli::try_parse_from(["ttt", "--two-player", "--piece", "x"]).unwrap();
        let agent = cli.build_agent().unwrap();
        assert_eq!(agent.engine().config().expansion, Expansion::Alternating);
    }

    #[test]
    fn test_invalid_piece() {
        assert!(Cli::try_parse_from(["ttt", "--piece", "z"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from(["ttt", "--config", "/nonexistent/ttt.json"]).unwrap();
        assert!(cli.build_agent().is_err());
    }
}
