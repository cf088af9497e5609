use anyhow::Result;
use clap::Parser;

use thumbboard_core::{extract_thumbnail_url, resolve_thumbnail_url};

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Video URL to resolve
    pub url: String,

    /// Exit with an error instead of echoing the input when no video id is found
    #[arg(long)]
    pub strict: bool,
}

/// Print the thumbnail URL that would be stored for `args.url`
pub fn run_resolve(args: ResolveArgs) -> Result<()> {
    if args.strict {
        let resolved = extract_thumbnail_url(&args.url)
            .ok_or_else(|| anyhow::anyhow!("no video id found in '{}'", args.url))?;
        println!("{resolved}");
    } else {
        println!("{}", resolve_thumbnail_url(&args.url));
    }
    Ok(())
}
