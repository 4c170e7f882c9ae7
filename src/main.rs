mod fetch;
mod i18n;
mod pages;
mod render;
mod routes;

use clap::{Parser, Subcommand};
use tracing::info;
use vitrine_client::{CmsClient, ContentApi};
use vitrine_core::config;
use vitrine_core::content::ContactMessage;
use vitrine_core::i18n::Language;
use vitrine_core::partners;

use crate::routes::Route;

#[derive(Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Vitrine: headless content engine for the company site"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a site page, e.g. `/`, `/privacy-policy`, `/partner/djezzy`.
    Render {
        /// Site path to render.
        #[arg(default_value = "/")]
        path: String,
        /// Reader language (en, fr, ar). Defaults to `site.default_language`.
        #[arg(short, long)]
        lang: Option<Language>,
        /// Print the page as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the partner directory.
    Partners {
        #[arg(long)]
        json: bool,
    },
    /// Submit the contact form.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
        #[arg(short, long)]
        lang: Option<Language>,
    },
    /// Show the effective configuration and check the CMS is reachable.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.site.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cms = CmsClient::from_config(&cfg.api);

    match cli.command {
        Commands::Render { path, lang, json } => {
            let lang = lang.unwrap_or(cfg.site.default_language);
            let route = Route::parse(&path);
            info!("rendering {route} ({lang})");
            let page = pages::load(&route, &cms, lang).await;
            if json {
                println!("{}", render::render_json(&page)?);
            } else {
                print!("{page}");
            }
        }
        Commands::Partners { json } => {
            let all = partners::all();
            if json {
                println!("{}", serde_json::to_string_pretty(all)?);
            } else {
                for p in all {
                    println!("{:<12} {:<28} {}", p.id, p.name, p.industry);
                }
            }
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
            lang,
        } => {
            let lang = lang.unwrap_or(cfg.site.default_language);
            let msg = ContactMessage {
                name,
                email,
                subject,
                message,
            }
            .validated()?;

            match cms.send_contact_message(&msg).await {
                Ok(_) => println!("{}", i18n::t("contact.sent", lang)),
                Err(e) => anyhow::bail!(i18n::contact_failed(lang, &e.to_string())),
            }
        }
        Commands::Status => {
            println!("Vitrine: Status Check\n");
            println!("Config: {}", cli.config);
            println!("API base URL: {}", cms.api().base_url());
            println!("Default language: {}", cfg.site.default_language);
            println!();

            let endpoints = &cfg.api.endpoints;
            for (name, path) in [
                ("contact", &endpoints.contact),
                ("contact submit", &endpoints.contact_submit),
                ("privacy policy", &endpoints.privacy_policy),
                ("terms", &endpoints.terms),
                ("about us", &endpoints.about_us),
            ] {
                println!("  {name:<15} {path}");
            }
            println!();

            println!(
                "  cms: {}",
                match cms.contact_info().await {
                    Ok(_) => "reachable".to_string(),
                    Err(e) => format!("unreachable ({e})"),
                }
            );
        }
    }

    Ok(())
}
