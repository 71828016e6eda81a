use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_cli::{Cli, GameSession};

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，避免和棋盘混在一起）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_cli=info".parse()?)
            .add_directive("ttt_ai=info".parse()?))
        .init();

    let cli = Cli::parse();
    let agent = cli.build_agent()?;
    info!("井字棋对局开始，AI 执 {}", agent.my_piece());

    let mut session = GameSession::new(agent);
    let stdin = io::stdin();
    let outcome = session.run(&mut stdin.lock(), &mut io::stdout())?;
    info!("对局结束: {:?}", outcome);

    Ok(())
}
