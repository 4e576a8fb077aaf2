mod config;
mod store;
mod transport;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gateway::transport::NoNavigation;
use gateway::types::{
    AdminSignup, DocumentQuery, DocumentSortColumn, ProfileUpdate, Sort, SortOrder, StatusFilter, SystemSettings,
    UserQuery, UserSortColumn, UserStatus,
};
use gateway::upload::{DocumentFile, progress_label};
use gateway::{Gateway, GatewayConfig, GatewayError, Progress, Role, SessionStore, UserSession};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::store::FileSessionStore;
use crate::transport::{ReqwestTransport, TokioTimer};

type CliGateway = Gateway<ReqwestTransport, FileSessionStore, NoNavigation, TokioTimer>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("no session directory; pass --session-dir or set PLAGIGUARD_SESSION_DIR")]
    NoSessionDir,
    #[error("not signed in as {0}; run `{1}` first")]
    NotSignedIn(&'static str, &'static str),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("cannot read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "plagiguard", about = "PlagiGuard backend CLI")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "PLAGIGUARD_API_BASE_URL")]
    base_url: Option<String>,

    /// Directory holding `user.json` / `admin.json`.
    #[arg(long, env = "PLAGIGUARD_SESSION_DIR")]
    session_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PLAGIGUARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PLAGIGUARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
    },
    /// Update the signed-in user's name and optionally their password.
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long, requires = "new_password")]
        current_password: Option<String>,
        #[arg(long, requires = "current_password")]
        new_password: Option<String>,
    },
    /// Upload a document for analysis.
    Upload { path: PathBuf },
    History,
    Whoami,
    Logout {
        #[arg(long, default_value_t = false)]
        admin: bool,
    },
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PLAGIGUARD_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    Stats,
    Users {
        #[arg(long, value_enum, default_value_t = UserSortArg::CreatedAt)]
        sort: UserSortArg,
        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,
    },
    SetStatus {
        user_id: String,
        #[arg(value_enum)]
        status: UserStatusArg,
    },
    Documents {
        #[arg(long, value_enum, default_value_t = DocumentSortArg::UploadDate)]
        sort: DocumentSortArg,
        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,
        #[arg(long, default_value = "")]
        ai_score_min: String,
        #[arg(long, default_value = "")]
        ai_score_max: String,
        #[arg(long, default_value = "")]
        date_from: String,
        #[arg(long, default_value = "")]
        date_to: String,
    },
    DeleteDocument {
        document_id: String,
    },
    Analytics,
    Settings,
    /// Replace system settings with a JSON object.
    UpdateSettings {
        #[arg(long)]
        data: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Asc,
    Desc,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum UserSortArg {
    FullName,
    Email,
    CreatedAt,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StatusArg {
    All,
    Active,
    Suspended,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum UserStatusArg {
    Active,
    Suspended,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DocumentSortArg {
    FileName,
    UserEmail,
    UploadDate,
    AiScore,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
        }
    }
}

impl From<UserSortArg> for UserSortColumn {
    fn from(arg: UserSortArg) -> Self {
        match arg {
            UserSortArg::FullName => Self::FullName,
            UserSortArg::Email => Self::Email,
            UserSortArg::CreatedAt => Self::CreatedAt,
        }
    }
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => Self::All,
            StatusArg::Active => Self::Active,
            StatusArg::Suspended => Self::Suspended,
        }
    }
}

impl From<UserStatusArg> for UserStatus {
    fn from(arg: UserStatusArg) -> Self {
        match arg {
            UserStatusArg::Active => Self::Active,
            UserStatusArg::Suspended => Self::Suspended,
        }
    }
}

impl From<DocumentSortArg> for DocumentSortColumn {
    fn from(arg: DocumentSortArg) -> Self {
        match arg {
            DocumentSortArg::FileName => Self::FileName,
            DocumentSortArg::UserEmail => Self::UserEmail,
            DocumentSortArg::UploadDate => Self::UploadDate,
            DocumentSortArg::AiScore => Self::AiScore,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dir = config::session_dir(cli.session_dir, dirs::config_dir())?;
    let config = GatewayConfig::from_base_url(cli.base_url.as_deref());
    tracing::debug!(base_url = %config.base_url, session_dir = %dir.display(), "cli configured");

    let gateway = Gateway::new(
        config,
        ReqwestTransport::default(),
        FileSessionStore::new(dir),
        NoNavigation,
        TokioTimer,
    );

    run(&gateway, cli.command).await
}

async fn run(gateway: &CliGateway, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let user = gateway.login_user(&email, &password).await?;
            tracing::info!(id = %user.id, "signed in");
            print_json(&user)
        }
        Command::Register { name, email, password } => match gateway.register_user(&name, &email, &password).await? {
            Some(user) => print_json(&user),
            None => {
                println!("registered; run `plagiguard login` to sign in");
                Ok(())
            }
        },
        Command::ForgotPassword { email } => {
            println!("{}", gateway.forgot_password(&email).await?);
            Ok(())
        }
        Command::ResetPassword { token, password } => {
            println!("{}", gateway.reset_password(&token, &password).await?);
            Ok(())
        }
        Command::Profile { name, current_password, new_password } => {
            let user = signed_in_user(gateway)?;
            let update = ProfileUpdate { user_id: user.id, full_name: name, current_password, new_password };
            print_json(&gateway.update_profile(&update).await?)
        }
        Command::Upload { path } => {
            let user = signed_in_user(gateway)?;
            let bytes = std::fs::read(&path).map_err(|source| CliError::ReadFile { path: path.clone(), source })?;
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            let file = DocumentFile::new(&name, None, bytes)?;
            let report = |percent: u8| eprintln!("{} {percent}%", progress_label(percent));
            let progress: Progress<'_> = &report;
            let result = gateway.upload_document(&user, file, Some(progress)).await?;
            print_json(&result)
        }
        Command::History => {
            let user = signed_in_user(gateway)?;
            print_json(&gateway.fetch_history(&user.id).await?)
        }
        Command::Whoami => {
            let store = gateway.store();
            print_json(&serde_json::json!({ "user": store.user(), "admin": store.admin() }))
        }
        Command::Logout { admin } => {
            let role = if admin { Role::Admin } else { Role::User };
            gateway.logout(role);
            println!("signed out ({})", role.storage_key());
            Ok(())
        }
        Command::Admin(admin) => run_admin(gateway, admin.command).await,
    }
}

async fn run_admin(gateway: &CliGateway, command: AdminSubcommand) -> Result<(), CliError> {
    if !matches!(command, AdminSubcommand::Login { .. } | AdminSubcommand::Signup { .. })
        && gateway.store().admin().is_none()
    {
        return Err(CliError::NotSignedIn("admin", "plagiguard admin login"));
    }

    match command {
        AdminSubcommand::Login { username, password } => {
            let admin = gateway.admin_login(&username, &password).await?;
            tracing::info!(id = %admin.id, "admin signed in");
            print_json(&admin)
        }
        AdminSubcommand::Signup { username, name, email, password, confirm_password } => {
            if password != confirm_password {
                return Err(CliError::PasswordMismatch);
            }
            let form = AdminSignup { username, password, full_name: name, email };
            gateway.admin_signup(&form).await?;
            println!("admin account created; run `plagiguard admin login` to sign in");
            Ok(())
        }
        AdminSubcommand::Stats => print_json(&gateway.dashboard_stats().await?),
        AdminSubcommand::Users { sort, order, status } => {
            let query = UserQuery {
                sort: Sort { column: sort.into(), order: order.into() },
                status: status.into(),
            };
            print_json(&gateway.list_users(&query).await?)
        }
        AdminSubcommand::SetStatus { user_id, status } => {
            gateway.update_user_status(&user_id, status.into()).await?;
            println!("user {user_id} is now {}", UserStatus::from(status).as_str());
            Ok(())
        }
        AdminSubcommand::Documents { sort, order, ai_score_min, ai_score_max, date_from, date_to } => {
            let query = DocumentQuery {
                sort: Sort { column: sort.into(), order: order.into() },
                ai_score_min,
                ai_score_max,
                date_from,
                date_to,
            };
            print_json(&gateway.list_documents(&query).await?)
        }
        AdminSubcommand::DeleteDocument { document_id } => {
            gateway.delete_document(&document_id).await?;
            println!("deleted document {document_id}");
            Ok(())
        }
        AdminSubcommand::Analytics => print_json(&gateway.analytics().await?),
        AdminSubcommand::Settings => print_json(&gateway.settings().await?),
        AdminSubcommand::UpdateSettings { data } => {
            let settings: SystemSettings = serde_json::from_str(&data)?;
            gateway.update_settings(&settings).await?;
            println!("Settings updated successfully");
            Ok(())
        }
    }
}

fn signed_in_user(gateway: &CliGateway) -> Result<UserSession, CliError> {
    gateway
        .store()
        .user()
        .filter(|u| !u.id.is_empty())
        .ok_or(CliError::NotSignedIn("user", "plagiguard login"))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn users_flags_map_onto_query() {
        let cli = Cli::try_parse_from([
            "plagiguard", "--base-url", "http://api.test", "admin", "users", "--sort", "full-name", "--order", "asc",
            "--status", "suspended",
        ])
        .expect("parse");
        let Command::Admin(AdminCommand { command: AdminSubcommand::Users { sort, order, status } }) = cli.command else {
            panic!("expected admin users");
        };
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
        assert_eq!(UserSortColumn::from(sort), UserSortColumn::FullName);
        assert_eq!(SortOrder::from(order), SortOrder::Asc);
        assert_eq!(StatusFilter::from(status), StatusFilter::Suspended);
    }

    #[test]
    fn profile_password_flags_come_in_pairs() {
        let parsed = Cli::try_parse_from(["plagiguard", "profile", "--name", "Ada", "--new-password", "x"]);
        assert!(parsed.is_err());
    }
}
