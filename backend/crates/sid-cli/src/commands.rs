use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with an email and password
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create a citizen account and sign in with it
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
    },

    /// End the current session
    SignOut,

    /// Show the signed-in identity and its dashboard
    Whoami,

    /// Check whether the current session may open a page
    Open {
        /// Page path, e.g. /admin-dashboard
        path: String,
    },

    /// List the built-in demo accounts
    Accounts {
        /// List accounts created with sign-up instead
        #[arg(long)]
        registered: bool,
    },
}
