//! Derive Command
//!
//! Builds validated `Params` from the flags and prints the derived key.

use anyhow::{bail, Context, Result};
use clap::Args;
use riptide::{derive, derive_no_salt, Params, Prf};

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Flags for the derivation. Pass `-` as the password to read it from stdin
/// (trailing newline stripped), keeping secrets out of the process list.
#[derive(Args)]
pub struct DeriveArgs {
    /// Password, or `-` to read it from stdin
    #[arg(value_name = "PASSWORD")]
    password: String,

    /// Salt string (use a random one; required unless --no-salt)
    #[arg(short, long, conflicts_with = "no_salt")]
    salt: Option<String>,

    /// Derive the salt from the password itself (compatibility mode, weak)
    #[arg(long)]
    no_salt: bool,

    /// With --no-salt: use only the first K bytes of the password as salt
    #[arg(long, value_name = "K", requires = "no_salt")]
    salt_len: Option<usize>,

    /// CPU/memory cost factor N (power of two, > 1)
    #[arg(short = 'n', long = "cost", default_value_t = 1024)]
    cost: u32,

    /// Block-size factor r
    #[arg(short = 'r', long = "block-size", default_value_t = 1)]
    block_size: u32,

    /// Parallelization factor p (independent lanes)
    #[arg(short = 'p', long = "parallelism", default_value_t = 1)]
    parallelism: u32,

    /// Derived key length in bytes
    #[arg(short = 'l', long = "length", default_value_t = 32)]
    length: usize,

    /// PRF digest for the PBKDF2 stages
    #[arg(long, default_value = "sha256")]
    prf: String,
}

// =============================================================================
// COMMAND
// =============================================================================

/// Run one derivation and print the key as lowercase hex.
pub fn run_derive(args: &DeriveArgs) -> Result<()> {
    let prf = Prf::from_name(&args.prf)
        .with_context(|| format!("unknown PRF '{}'", args.prf))?;
    let params = Params::new(args.cost, args.block_size, args.parallelism, args.length, prf)
        .context("invalid cost parameters")?;

    let password = read_password(&args.password)?;

    let key = if args.no_salt {
        derive_no_salt(password.as_bytes(), args.salt_len, &params)
    } else {
        let Some(salt) = args.salt.as_deref() else {
            bail!("a salt is required; pass --salt or opt into --no-salt");
        };
        derive(password.as_bytes(), salt.as_bytes(), &params)
    }
    .context("derivation failed")?;

    println!("{}", hex::encode(key));
    Ok(())
}

fn read_password(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_owned());
    }
    let mut buffer = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
        .context("failed to read password from stdin")?;
    while buffer.ends_with(['\n', '\r']) {
        buffer.pop();
    }
    Ok(buffer)
}
