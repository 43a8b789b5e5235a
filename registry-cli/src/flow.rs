use registry::{Registry, User};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::error::PromptError;

/// Runs the whole session once: populate, list, sort and list, prompt, look up.
///
/// Lookup misses and bad input are reported on `output`; only I/O failures
/// on `output` are returned as errors.
pub fn run<R: BufRead, W: Write>(
    users: Vec<User>,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut registry: Registry = users.into_iter().collect();
    info!(users = registry.user_count(), "registry populated");

    writeln!(output, "Users:")?;
    list_users(&registry, &mut output)?;

    info!("sorting users by balance");
    registry.sort_by_balance();
    writeln!(output, "\nSorted by balance:")?;
    list_users(&registry, &mut output)?;

    info!("prompting for user id");
    write!(output, "\nEnter user ID to search: ")?;
    output.flush()?;

    match read_user_id(&mut input) {
        Ok(id) => {
            info!(id, "looking up user");
            report_lookup(&registry, id, &mut output)?;
        }
        Err(err) => {
            warn!(%err, "could not read user id");
            writeln!(output, "Invalid input: {}", err)?;
        }
    }

    info!("session finished");
    Ok(())
}

fn report_lookup<W: Write>(registry: &Registry, id: i64, output: &mut W) -> io::Result<()> {
    match registry.find_by_id(id) {
        Ok(user) => {
            writeln!(output, "Found user:")?;
            writeln!(output, "{}", user)
        }
        Err(err) => writeln!(output, "{}", err),
    }
}

fn list_users<W: Write>(registry: &Registry, output: &mut W) -> io::Result<()> {
    for user in registry {
        writeln!(output, "{}", user)?;
    }
    Ok(())
}

/// Reads the first whitespace-separated token and parses it as a user id.
/// Blank lines before the token are skipped.
fn read_user_id<R: BufRead>(input: &mut R) -> Result<i64, PromptError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Empty);
        }

        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse()
                .map_err(|_| PromptError::InvalidId(token.to_string()));
        }
    }
}
