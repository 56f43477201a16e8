//! Send a message to the assistant and print the reply.

use vanakkam_client::{ChatResponse, ClientConfig, Dispatcher, Intent};

use super::CommandError;

/// Dispatch a message, classifying it unless a skill was named explicitly.
pub async fn send(message: &str, skill: Option<&str>) -> Result<(), CommandError> {
    let config = ClientConfig::from_env()?;
    let dispatcher = Dispatcher::new(&config)?;

    let reply = match skill {
        Some(raw) => {
            let intent: Intent = raw
                .parse()
                .map_err(|_| CommandError::InvalidSkill(raw.to_owned()))?;
            dispatcher.dispatch_as(message, intent).await?
        }
        None => dispatcher.dispatch(message).await?,
    };

    print_reply(&reply);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_reply(reply: &ChatResponse) {
    println!("{}", reply.response);
    if let Some(audio_url) = &reply.audio_url {
        println!("🔊 {audio_url}");
    }
}
