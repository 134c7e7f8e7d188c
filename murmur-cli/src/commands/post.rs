use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct PostArgs {
    /// Message text; multiple words are joined with spaces
    #[arg(required = true, trailing_var_arg = true)]
    pub message: Vec<String>,

    /// Post under this name instead of the derived one
    #[arg(long = "as", value_name = "NAME")]
    pub author: Option<String>,
}

pub fn run(args: PostArgs, config: &MurmurConfig) -> Result<()> {
    let author = super::author(config, args.author);
    let body = args.message.join(" ");

    let message = super::feed(config).post(&author, &body)?;
    info!(id = %message.id, author = %message.author, "Posted message");

    println!("{}", murmur_core::feed::format_message(&message));
    Ok(())
}
