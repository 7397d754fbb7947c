use clap::{ArgAction, Args};

use crate::cli::Context;
use crate::client::{Api, RegisterRequest};
use crate::guard::{self, Page};
use crate::{MvcatError, Result};

const MIN_PASSWORD_CHARS: usize = 8;

/// Register a new account.
#[derive(Args, Debug)]
pub struct RegisterCommand {
    /// Account email
    #[arg(long, env = "MVCAT_EMAIL")]
    email: String,
    /// Account password
    #[arg(long, env = "MVCAT_PASSWORD")]
    password: String,
    /// Register as administrator
    #[arg(long, action = ArgAction::SetTrue)]
    admin: bool,
}

impl RegisterCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let session = ctx.store.initialize(&ctx.api).await;
        if let Some(to) = guard::redirect(Page::Register, &session) {
            println!("Already logged in, redirecting to {}", to.path());
            return Ok(());
        }

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(MvcatError::Validation {
                errors: vec![format!(
                    "password must be at least {} characters",
                    MIN_PASSWORD_CHARS
                )],
            });
        }

        let registration = ctx
            .api
            .register(&RegisterRequest {
                email: self.email,
                password: self.password,
                is_admin: self.admin,
            })
            .await?;

        match registration.message {
            Some(message) => println!("{}", message),
            None => println!("Successfully registered!"),
        }
        println!("Redirecting to {}", Page::Login.path());

        Ok(())
    }
}
