//! Play command - Interactive game against the computer opponent
//!
//! A single-threaded, trigger-driven loop: read one line of input, turn it
//! into a session event, execute the effects the session hands back, and
//! redraw. The opponent's "thinking" delay is a plain sleep between the
//! schedule effect and the timer event, so the whole loop stays one logical
//! writer with no synchronization.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::TerminalRenderer,
    app::{App, SessionConfig},
    ports::{BoardView, Renderer},
    session::{Effect, Event, Session},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the computer")]
pub struct PlayArgs {
    /// Thinking delay before the computer's move, in milliseconds
    #[arg(long, default_value_t = crate::app::config::DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Random seed for the opponent's fallback tier
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the sign-in prompt and play as "guest"
    #[arg(long)]
    pub guest: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut app = App::new();

    sign_in(&mut app, &mut input, args.guest)?;

    let mut config = SessionConfig::new().with_delay_ms(args.delay_ms);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = app.create_session(config)?;
    let mut renderer = TerminalRenderer::stdout();

    println!(
        "\nSigned in as {}. You are X; the computer is O.",
        app.auth_gate().visitor().unwrap_or("guest")
    );
    println!("Enter a cell number (0-8), 'r' to reset, or 'q' to quit.");
    renderer.render(&BoardView::of(&session));

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let event = match parse_command(line.trim()) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => Event::ResetPressed,
            Some(Command::Click(pos)) => Event::CellClicked(pos),
            None => {
                println!("Unrecognized input. Use 0-8, 'r', or 'q'.");
                continue;
            }
        };

        run_event(&mut session, &mut renderer, event)?;
    }

    Ok(())
}

/// Feed one event into the session and execute the resulting effects,
/// redrawing after every state change.
fn run_event<R: Renderer>(session: &mut Session, renderer: &mut R, event: Event) -> Result<()> {
    let mut effects = session.handle(event)?;
    renderer.render(&BoardView::of(session));

    while let Some(effect) = effects.pop() {
        match effect {
            Effect::ScheduleOpponent { delay, token } => {
                // Cosmetic only. Input is not read while we wait, so the
                // token can never go stale here; the session still checks.
                std::thread::sleep(delay);
                effects.extend(session.handle(Event::TimerFired(token))?);
                renderer.render(&BoardView::of(session));
            }
            Effect::CancelTimer(_) => {
                // Blocking loop: a cancelled timer was never armed with the
                // runtime, so there is nothing to tear down.
            }
        }
    }

    Ok(())
}

enum Command {
    Click(usize),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "r" | "reset" => Some(Command::Reset),
        _ => line
            .parse::<usize>()
            .ok()
            .filter(|&pos| pos < 9)
            .map(Command::Click),
    }
}

/// Gate the game behind sign-in: prompt for a visitor name unless `--guest`
/// was passed. An empty name stays signed out and re-prompts.
fn sign_in<R: BufRead>(app: &mut App, input: &mut R, guest: bool) -> Result<()> {
    if guest {
        app.auth_gate_mut().sign_in("guest");
        return Ok(());
    }

    while !app.auth_gate().is_signed_in() {
        print!("Sign in to play. Visitor name: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("sign-in aborted");
        }
        let name = line.trim();
        if !name.is_empty() {
            app.auth_gate_mut().sign_in(name);
        }
    }

    Ok(())
}
