//! A simple program demonstrates how to use `scout` as a library.
//!
//! Lines of the form `Tool[input]` invoke a registered tool, anything
//! else is sent to the model.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use scout::ScoutBuilder;
use scout::core::{ModelGateway, ToolRegistry};
use scout::{observation_message, parse_action};
use scout_model::{ChatOptions, ModelMessage};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

const SYSTEM_PROMPT: &str = "You are a helpful assistant. When the user \
shares an observation from a tool, use it to answer.";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let builder = ScoutBuilder::new();
    let tools = builder.build_tools();
    let gateway = match builder.build_gateway() {
        Ok(gateway) => Some(gateway),
        Err(err) => {
            warn!("chat is unavailable: {err}");
            None
        }
    };

    println!("{}", "Available tools:".bright_white().bold());
    println!("{}\n", tools.list_descriptions());

    let mut history = vec![ModelMessage::system(SYSTEM_PROMPT)];
    let mut stdin = io::BufReader::new(io::stdin());

    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() {
            break;
        }

        let Some(line) = read_line(&mut stdin).await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((name, input)) = parse_action(line) {
            let observation = run_tool(&tools, name, input).await;
            history.push(observation_message(name, &observation));
            continue;
        }

        let Some(gateway) = &gateway else {
            println!(
                "{}Chat is unavailable, set ARK_API_KEY or OPENAI_API_KEY.\n",
                BAR_CHAR.bright_red()
            );
            continue;
        };
        history.push(ModelMessage::user(line));
        match chat(gateway, &history).await {
            Some(reply) => history.push(ModelMessage::assistant(reply)),
            // Keep the history consistent for the next attempt.
            None => {
                history.pop();
            }
        }
    }
}

async fn run_tool(tools: &ToolRegistry, name: &str, input: &str) -> String {
    let Some(handler) = tools.get(name) else {
        let observation = format!("Error: no tool named '{name}'.");
        println!("{}{}\n", BAR_CHAR.bright_red(), observation);
        return observation;
    };

    let spinner = make_spinner(format!("🔍 Running {name}..."));
    let observation = handler.call(input).await;
    spinner.finish_and_clear();

    println!("{}🔎 {}\n", BAR_CHAR.bright_yellow(), observation.bright_white());
    observation
}

async fn chat(gateway: &ModelGateway, history: &[ModelMessage]) -> Option<String> {
    let spinner = make_spinner("🤔 Thinking...".to_owned());
    let result = gateway.chat(history.to_vec(), ChatOptions::new()).await;
    spinner.finish_and_clear();

    match result {
        Ok(reply) => {
            println!("{}🤖 {}\n", BAR_CHAR.bright_cyan(), reply.bright_white());
            Some(reply)
        }
        Err(err) => {
            error!("chat failed: {err}");
            println!("{}{}\n", BAR_CHAR.bright_red(), err);
            None
        }
    }
}

fn make_spinner(message: String) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Option<String> {
    let mut line = String::new();

    match reader.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
