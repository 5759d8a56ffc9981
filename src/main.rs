mod alert;
mod api;
mod config;
mod forms;
mod logging;
mod model;
mod pdf;
mod render;
mod session;
mod state;

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};

use crate::alert::{AlertKind, AlertPresenter};
use crate::api::{ApiClient, ApiError};
use crate::forms::{collect_breakdown, parse_answer_args, render_form_named};
use crate::model::{Category, NewProduct, NewScorecard, ScorecardFilter};
use crate::render::cards::render_product_cards;
use crate::render::table::render_scorecard_table;
use crate::render::trend::{ChartSurface, TextChart, multi_metric_spec, trend_spec};
use crate::session::{Session, SessionStore};
use crate::state::{AppState, SessionState};

#[derive(Debug, Parser)]
#[command(
    name = "scoredeck",
    version,
    about = "Terminal client for the delivery scorecard service"
)]
struct Cli {
    /// Backend base URL; falls back to SCOREDECK_API_URL, then localhost.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session token.
    Logout,
    /// Show session state and a dashboard summary.
    Status,
    /// Browse and create products.
    Products {
        #[command(subcommand)]
        action: ProductCommand,
    },
    /// List scorecards, optionally filtered.
    Scorecards {
        #[arg(long)]
        product: Option<i64>,
        #[arg(long)]
        category: Option<Category>,
    },
    /// Print the blank assessment form for a category.
    Form { category: String },
    /// Submit a scorecard.
    Submit(SubmitArgs),
    /// Chart score trends for a product.
    Trends {
        #[arg(long)]
        product: i64,
        /// With a category the trend endpoint is charted; without one the
        /// product's scorecards are charted as one series per category.
        #[arg(long)]
        category: Option<Category>,
        #[arg(long, default_value_t = 90)]
        days: u32,
    },
    /// Export a scorecard as PDF.
    Pdf {
        scorecard_id: i64,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
enum ProductCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Debug, Args)]
struct SubmitArgs {
    #[arg(long)]
    product: i64,
    #[arg(long)]
    category: Category,
    /// Assessment date (ISO); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Field answer as key=value; unanswered fields read as unchecked/unrated.
    #[arg(long = "answer", value_name = "KEY=VALUE")]
    answers: Vec<String>,
    #[arg(long)]
    feedback: Option<String>,
    #[arg(long)]
    tool_suggestions: Option<String>,
}

#[derive(Debug)]
enum RunError {
    Fatal(String),
    /// Already surfaced through the alert presenter; only the exit code is left.
    Reported,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        if let RunError::Fatal(message) = err {
            eprintln!("{message}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let store = SessionStore::new(config::resolve_session_path());
    let mut state = AppState::with_session(store.load());
    let api = ApiClient::new(&config::resolve_api_url(cli.api_url)).with_token(state.token());
    let mut alerts = AlertPresenter::default();
    debug!(api_url = %api.base_url(), session_file = %store.path().display(), "starting");

    match cli.command {
        Command::Login { email, password } => {
            login(&api, &store, &mut state, &mut alerts, &email, &password)
        }
        Command::Register { email, password } => register(&api, &mut alerts, &email, &password),
        Command::Logout => logout(&store, &mut state, &mut alerts),
        Command::Status => status(&api, &mut state),
        Command::Products { action } => match action {
            ProductCommand::List => list_products(&api, &mut state),
            ProductCommand::Create { name, description } => {
                create_product(&api, &mut state, &mut alerts, name, description)
            }
        },
        Command::Scorecards { product, category } => {
            list_scorecards(&api, &mut state, product, category)
        }
        Command::Form { category } => {
            let view = render_form_named(&category);
            if view.is_empty() {
                println!(
                    "No form for `{category}`. Categories: automation, performance, security, cicd."
                );
            } else {
                print!("{view}");
            }
            Ok(())
        }
        Command::Submit(args) => submit(&api, &mut state, &mut alerts, args),
        Command::Trends {
            product,
            category,
            days,
        } => trends(&api, &mut state, product, category, days),
        Command::Pdf { scorecard_id, out } => export_pdf(&api, &mut alerts, scorecard_id, &out),
    }
}

fn present(alerts: &mut AlertPresenter, kind: AlertKind, message: String) {
    let now = Instant::now();
    alerts.show(kind, message, now);
    if let Some(alert) = alerts.current(now) {
        match alert.kind {
            AlertKind::Success => println!("{}", alert.banner()),
            AlertKind::Error => eprintln!("{}", alert.banner()),
        }
    }
}

fn failure_message(err: &ApiError, fallback: &str) -> String {
    warn!(status = ?err.status(), %err, "api call failed");
    match err.backend_detail() {
        Some(detail) => detail.to_string(),
        None => fallback.to_string(),
    }
}

fn login_failure_message(err: &ApiError) -> String {
    format!(
        "Login failed: {}",
        err.backend_detail().unwrap_or("Unknown error")
    )
}

fn login(
    api: &ApiClient,
    store: &SessionStore,
    state: &mut AppState,
    alerts: &mut AlertPresenter,
    email: &str,
    password: &str,
) -> Result<(), RunError> {
    match api.login(email, password) {
        Ok(token) => {
            let session = Session {
                token: token.access_token,
                current_user: Some(email.to_string()),
            };
            store
                .save(&session)
                .map_err(|err| RunError::Fatal(err.to_string()))?;
            state.set_session(session);
            present(
                alerts,
                AlertKind::Success,
                "Logged in successfully!".to_string(),
            );
            Ok(())
        }
        Err(err) => {
            warn!(status = ?err.status(), "login failed");
            present(alerts, AlertKind::Error, login_failure_message(&err));
            Err(RunError::Reported)
        }
    }
}

fn register(
    api: &ApiClient,
    alerts: &mut AlertPresenter,
    email: &str,
    password: &str,
) -> Result<(), RunError> {
    match api.register(email, password) {
        Ok(()) => {
            present(
                alerts,
                AlertKind::Success,
                "Account created. You can now log in.".to_string(),
            );
            Ok(())
        }
        Err(err) => {
            let message = failure_message(&err, "Registration failed");
            present(alerts, AlertKind::Error, message);
            Err(RunError::Reported)
        }
    }
}

fn logout(
    store: &SessionStore,
    state: &mut AppState,
    alerts: &mut AlertPresenter,
) -> Result<(), RunError> {
    store
        .clear()
        .map_err(|err| RunError::Fatal(err.to_string()))?;
    state.clear_session();
    present(alerts, AlertKind::Success, "Logged out.".to_string());
    Ok(())
}

fn status(api: &ApiClient, state: &mut AppState) -> Result<(), RunError> {
    match state.session_state() {
        SessionState::LoggedOut => {
            println!("Not logged in.");
            println!(
                "Run `scoredeck login --email <email> --password <password>` to authenticate."
            );
            Ok(())
        }
        SessionState::LoggedIn => {
            match state
                .session
                .as_ref()
                .and_then(|s| s.current_user.as_deref())
            {
                Some(user) => println!("Logged in as {user}."),
                None => println!("Logged in."),
            }

            match api.list_products() {
                Ok(products) => {
                    state.replace_products(products);
                    println!("Products: {}", state.products().len());
                }
                Err(err) => {
                    warn!(%err, "product load failed");
                    println!("Error loading products");
                }
            }
            match api.list_scorecards(&ScorecardFilter::default()) {
                Ok(scorecards) => {
                    state.replace_scorecards(scorecards);
                    println!("Scorecards: {}", state.scorecards().len());
                }
                Err(err) => {
                    warn!(%err, "scorecard load failed");
                    println!("Error loading scorecards");
                }
            }
            Ok(())
        }
    }
}

fn list_products(api: &ApiClient, state: &mut AppState) -> Result<(), RunError> {
    match api.list_products() {
        Ok(products) => {
            state.replace_products(products);
            print!("{}", render_product_cards(state.products()));
            Ok(())
        }
        Err(err) => {
            warn!(%err, "product load failed");
            println!("Error loading products");
            Err(RunError::Reported)
        }
    }
}

fn create_product(
    api: &ApiClient,
    state: &mut AppState,
    alerts: &mut AlertPresenter,
    name: String,
    description: Option<String>,
) -> Result<(), RunError> {
    let new = NewProduct { name, description };
    match api.create_product(&new) {
        Ok(_) => {
            present(
                alerts,
                AlertKind::Success,
                "Product created successfully!".to_string(),
            );
            // The dashboard reloads its product list after a create.
            match api.list_products() {
                Ok(products) => {
                    state.replace_products(products);
                    print!("{}", render_product_cards(state.products()));
                }
                Err(err) => {
                    warn!(%err, "product reload failed");
                    println!("Error loading products");
                }
            }
            Ok(())
        }
        Err(err) => {
            let message = failure_message(&err, "Error creating product");
            present(alerts, AlertKind::Error, message);
            Err(RunError::Reported)
        }
    }
}

fn list_scorecards(
    api: &ApiClient,
    state: &mut AppState,
    product: Option<i64>,
    category: Option<Category>,
) -> Result<(), RunError> {
    match api.list_products() {
        Ok(products) => state.replace_products(products),
        Err(err) => warn!(%err, "product load failed; table falls back to ids"),
    }

    let filter = ScorecardFilter {
        product_id: product,
        category,
    };
    match api.list_scorecards(&filter) {
        Ok(scorecards) => {
            state.replace_scorecards(scorecards);
            print!(
                "{}",
                render_scorecard_table(state.scorecards(), state.products())
            );
            Ok(())
        }
        Err(err) => {
            warn!(%err, "scorecard load failed");
            println!("Error loading scorecards");
            Err(RunError::Reported)
        }
    }
}

fn submit(
    api: &ApiClient,
    state: &mut AppState,
    alerts: &mut AlertPresenter,
    args: SubmitArgs,
) -> Result<(), RunError> {
    let answers =
        parse_answer_args(&args.answers).map_err(|err| RunError::Fatal(err.to_string()))?;
    let breakdown = collect_breakdown(args.category, &answers)
        .map_err(|err| RunError::Fatal(err.to_string()))?;

    let new = NewScorecard {
        product_id: args.product,
        category: args.category,
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        breakdown,
        feedback: args.feedback,
        tool_suggestions: args.tool_suggestions,
    };

    match api.create_scorecard(&new) {
        Ok(_) => {
            present(
                alerts,
                AlertKind::Success,
                "Scorecard submitted successfully!".to_string(),
            );
            list_scorecards(api, state, Some(args.product), None)
        }
        Err(err) => {
            let message = failure_message(&err, "Error submitting scorecard");
            present(alerts, AlertKind::Error, message);
            Err(RunError::Reported)
        }
    }
}

fn trends(
    api: &ApiClient,
    state: &mut AppState,
    product: i64,
    category: Option<Category>,
    days: u32,
) -> Result<(), RunError> {
    match api.list_products() {
        Ok(products) => state.replace_products(products),
        Err(err) => warn!(%err, "product load failed; chart title falls back to id"),
    }
    let product_label = state
        .product_name(product)
        .map(str::to_string)
        .unwrap_or_else(|| format!("product #{product}"));

    let spec = match category {
        Some(category) => match api.list_trends(product, category, days) {
            Ok(points) => trend_spec(&product_label, category, &points),
            Err(err) => {
                warn!(%err, "trend load failed");
                println!("Error loading trends");
                return Err(RunError::Reported);
            }
        },
        None => {
            let filter = ScorecardFilter {
                product_id: Some(product),
                category: None,
            };
            match api.list_scorecards(&filter) {
                Ok(scorecards) => {
                    state.replace_scorecards(scorecards);
                    multi_metric_spec(state.scorecards())
                }
                Err(err) => {
                    warn!(%err, "scorecard load failed");
                    println!("Error loading scorecards");
                    return Err(RunError::Reported);
                }
            }
        }
    };

    let backend = TextChart::default();
    let mut surface = ChartSurface::default();
    surface.render(&backend, spec);
    if let Some(chart) = surface.current() {
        debug!(
            series = chart.spec.series.len(),
            points = chart.spec.x_labels.len(),
            "chart rendered"
        );
        print!("{}", chart.output);
    }
    Ok(())
}

fn export_pdf(
    api: &ApiClient,
    alerts: &mut AlertPresenter,
    scorecard_id: i64,
    out: &Path,
) -> Result<(), RunError> {
    match api.download_scorecard_pdf(scorecard_id) {
        Ok(download) => match pdf::save_pdf(&download, out) {
            Ok(path) => {
                present(
                    alerts,
                    AlertKind::Success,
                    format!("Saved {}", path.display()),
                );
                Ok(())
            }
            Err(err) => Err(RunError::Fatal(format!(
                "could not write {}: {err}",
                download.filename
            ))),
        },
        Err(err) => {
            let message = failure_message(&err, "Error downloading PDF");
            present(alerts, AlertKind::Error, message);
            Err(RunError::Reported)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_submit_answers() {
        let cli = Cli::parse_from([
            "scoredeck",
            "submit",
            "--product",
            "3",
            "--category",
            "cicd",
            "--date",
            "2024-03-01",
            "--answer",
            "deployment_frequency=3",
            "--answer",
            "automated_build=yes",
        ]);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit command");
        };
        assert_eq!(args.product, 3);
        assert_eq!(args.category, Category::Cicd);
        assert_eq!(args.date, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert_eq!(args.answers.len(), 2);
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let parsed = Cli::try_parse_from(["scoredeck", "scorecards", "--category", "quality"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_trend_days_default() {
        let cli = Cli::parse_from(["scoredeck", "trends", "--product", "1"]);
        let Command::Trends { days, category, .. } = cli.command else {
            panic!("expected trends command");
        };
        assert_eq!(days, 90);
        assert!(category.is_none());
    }

    #[test]
    fn test_login_failure_message_fallback_is_unknown_error() {
        let detailed = ApiError::Backend {
            status: 401,
            detail: "Invalid credentials".to_string(),
        };
        assert_eq!(
            login_failure_message(&detailed),
            "Login failed: Invalid credentials"
        );

        let opaque = ApiError::Status { status: 500 };
        assert_eq!(login_failure_message(&opaque), "Login failed: Unknown error");
    }

    #[test]
    fn test_failure_message_prefers_backend_detail() {
        let backend = ApiError::Backend {
            status: 409,
            detail: "Product already exists".to_string(),
        };
        assert_eq!(
            failure_message(&backend, "Error creating product"),
            "Product already exists"
        );

        let opaque = ApiError::Status { status: 500 };
        assert_eq!(
            failure_message(&opaque, "Error creating product"),
            "Error creating product"
        );
    }
}
