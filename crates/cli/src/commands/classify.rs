//! Show which skill a message routes to, offline.

use vanakkam_client::classify;

/// Print the classified intent for the given text.
#[allow(clippy::print_stdout)]
pub fn show(text: &str) {
    println!("{}", classify(text));
}
