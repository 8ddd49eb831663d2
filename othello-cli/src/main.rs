use anyhow::Result;
use othello_cli::{App, CliSettings};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("othello_cli=info".parse()?))
        .init();

    let path = std::env::args().nth(1);
    let settings = CliSettings::from_args(path.as_deref())?;
    info!("黑白棋启动，设置: {:?}", settings);

    let mut app = App::new(settings, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    match app.run().await? {
        Some(result) => info!("对局结束: {:?} {:?}", result, app.session().score()),
        None => info!("玩家退出"),
    }

    Ok(())
}
