use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use client::{
    DynPricelistApi, FileSessionStore, HttpApiClient, Language, Session,
    api::DEFAULT_API_URL,
    views::{
        EditOutcome, LoginState, LoginView, MountOutcome, Navigation, PriceListView, TermsView,
    },
};
use dotenv::dotenv;
use shared::{domain::product_field::ProductField, utils::init_logger};
use std::{path::PathBuf, process::ExitCode, sync::Arc};

/// Terminal front end for the price list.
#[derive(Debug, Parser)]
#[command(name = "pricelist")]
struct Cli {
    #[arg(long, env = "PRICELIST_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Session file, defaults to the platform data dir.
    #[arg(long)]
    session: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Language::En)]
    lang: Language,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and remember the token.
    Login { username: String, password: String },
    /// Show the terms and conditions.
    Terms,
    /// Show the price list, optionally filtered.
    List {
        #[arg(long, default_value = "")]
        article: String,
        #[arg(long, default_value = "")]
        product: String,
    },
    /// Change one cell of one product.
    Set {
        id: i32,
        field: String,
        value: String,
    },
    /// Forget the stored token.
    Logout,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let _log_guard = init_logger("pricelist", false, false);

    let cli = Cli::parse();

    let api: DynPricelistApi = Arc::new(HttpApiClient::new(&cli.api_url)?);
    let store = Arc::new(FileSessionStore::new(
        cli.session.unwrap_or_else(FileSessionStore::default_path),
    ));
    let mut session = Session::load(store)
        .await
        .context("Failed to load session")?;

    match cli.command {
        Command::Login { username, password } => {
            let mut view = LoginView::new(cli.lang);
            view.load_texts(api.as_ref()).await;

            let next = view
                .submit(api.as_ref(), &mut session, &username, &password)
                .await;
            print!("{view}");

            if let (Some(Navigation::PriceList), LoginState::Authenticated(_)) =
                (next, view.state())
            {
                return show_price_list(api.as_ref(), &mut session, PriceListView::new()).await;
            }
            Ok(ExitCode::FAILURE)
        }

        Command::Terms => {
            let view = TermsView::load(api.as_ref(), cli.lang).await;
            println!("{view}");
            Ok(ExitCode::SUCCESS)
        }

        Command::List { article, product } => {
            let mut view = PriceListView::new();
            view.set_article_filter(article);
            view.set_product_filter(product);
            show_price_list(api.as_ref(), &mut session, view).await
        }

        Command::Set { id, field, value } => {
            let field = field
                .parse::<ProductField>()
                .map_err(|_| anyhow!("'{field}' is not an editable column"))?;

            let mut view = PriceListView::new();
            match view
                .edit(api.as_ref(), &mut session, id, field, &value)
                .await?
            {
                EditOutcome::Saved(product) => {
                    println!("Product {} {} = {}", product.id, field, product.field_text(field));
                    Ok(ExitCode::SUCCESS)
                }
                EditOutcome::Rejected(message) => {
                    eprintln!("{message}");
                    Ok(ExitCode::FAILURE)
                }
                EditOutcome::SessionExpired => {
                    eprintln!("Session expired, please log in again");
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Logout => {
            PriceListView::new().logout(&mut session).await?;
            println!("Logged out");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn show_price_list(
    api: &dyn client::PricelistApi,
    session: &mut Session,
    mut view: PriceListView,
) -> Result<ExitCode> {
    match view.mount(api, session).await? {
        MountOutcome::Loaded => {
            print!("{view}");
            Ok(ExitCode::SUCCESS)
        }
        MountOutcome::Redirect(_) => {
            eprintln!("Session expired, please log in again");
            Ok(ExitCode::FAILURE)
        }
        MountOutcome::Failed(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}
