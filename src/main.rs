use anyhow::Result;
use robotsmith::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let (app, args) = App::from_args()?;

    app.run(args).await?;

    Ok(())
}
