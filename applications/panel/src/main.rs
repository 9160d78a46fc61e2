/// Scribe Panel - terminal front end for a Scribe blog server
use anyhow::Context;
use clap::{Parser, Subcommand};
use scribe_core::types::Identity;
use scribe_server_client::{ClientConfig, CredentialStrategy, PanelClient};
use scribe_sidebar::{
    load_user_directory, store_identity, FileSessionStore, IdentitySource, SessionStore,
    SidebarController, SidebarState, TextSurface, KEY_ACCESS_TOKEN,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{AuthTransport, PanelConfig};

#[derive(Parser)]
#[command(name = "scribe-panel")]
#[command(about = "Terminal panel for a Scribe blog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sidebar menu
    Sidebar {
        /// Verify the identity against the server instead of trusting the cache
        #[arg(short, long)]
        verified: bool,
    },
    /// List the users known to the server
    Users,
    /// List all posts
    Posts,
    /// Login and cache the session locally
    Login {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// End the session and clear the cached identity
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scribe_panel=info,scribe_server_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = PanelConfig::load()?;

    let store = FileSessionStore::open(&config.session.cache_path)
        .context("opening session cache")?;

    let credentials = match config.server.auth {
        AuthTransport::Cookie => CredentialStrategy::AmbientCookie,
        AuthTransport::Bearer => store
            .get(KEY_ACCESS_TOKEN)
            .map(CredentialStrategy::BearerToken)
            .unwrap_or_default(),
    };

    let client = Arc::new(PanelClient::new(ClientConfig::with_credentials(
        config.server.url.clone(),
        credentials,
    ))?);

    tracing::debug!(url = %config.server.url, auth = ?config.server.auth, "panel configured");

    match cli.command {
        Commands::Sidebar { verified } => sidebar(client, store, verified).await,
        Commands::Users => users(&client).await,
        Commands::Posts => posts(&client).await,
        Commands::Login { username, password } => {
            login(&client, store, &username, &password).await
        }
        Commands::Logout => logout(client, store).await,
    }
}

async fn sidebar(
    client: Arc<PanelClient>,
    store: FileSessionStore,
    verified: bool,
) -> anyhow::Result<()> {
    let source = if verified {
        IdentitySource::Verified
    } else {
        IdentitySource::Cached
    };

    let mut controller = SidebarController::new(client, TextSurface::new(), store);
    controller.load(source).await?;
    print!("{}", controller.surface().contents());
    Ok(())
}

async fn users(client: &PanelClient) -> anyhow::Result<()> {
    let mut surface = TextSurface::new();
    let directory = load_user_directory(client, &mut surface).await;
    print!("{}", surface.contents());

    if directory.is_empty() {
        println!("(no users)");
    } else {
        for (id, username) in directory.iter() {
            println!("{id:>6}  {username}");
        }
    }
    Ok(())
}

async fn posts(client: &PanelClient) -> anyhow::Result<()> {
    let posts = client.list_posts().await.context("fetching posts")?;

    if posts.is_empty() {
        println!("(no posts)");
    } else {
        for post in posts {
            println!("{:>6}  {}  (user {})", post.id, post.title, post.user_id);
        }
    }
    Ok(())
}

async fn login(
    client: &PanelClient,
    mut store: FileSessionStore,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let login = client.login(username, password).await?;

    store_identity(
        &mut store,
        &Identity::new(login.username.clone(), login.role),
        Some(&login.access_token),
    )?;

    println!("logged in as {} ({})", login.username, login.role);
    Ok(())
}

async fn logout(client: Arc<PanelClient>, store: FileSessionStore) -> anyhow::Result<()> {
    let mut controller = SidebarController::new(client, TextSurface::new(), store);
    controller.load(IdentitySource::Cached).await?;
    controller.logout().await?;

    match controller.state() {
        SidebarState::RedirectedLoggedOut => println!("logged out"),
        _ => println!("logout failed; session left in place"),
    }
    Ok(())
}
