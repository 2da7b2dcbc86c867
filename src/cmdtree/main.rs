use clap::Parser;
use cmdtree::console::Console;
use cmdtree::error::Result;
use cmdtree::source::StdinSource;

#[derive(Parser)]
#[command(name = "cmdtree", version, about = "Interactive demo console for the cmdtree dispatcher")]
struct Cli {
    /// Prompt printed before each input line.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Suppress the prompt (useful when piping input).
    #[arg(long)]
    no_prompt: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let console = Console::new();
    register_demo_commands(&console);

    let source = if cli.no_prompt {
        StdinSource::new()
    } else {
        StdinSource::with_prompt(cli.prompt)
    };

    let handle = console.start(source)?;
    handle.join();
    Ok(())
}

fn register_demo_commands(console: &Console) {
    console
        .register()
        .action("echo")
        .option("text", "t")
        .argument("text")
        .executor(|values: &[String]| {
            println!("{}", values.join(" "));
            Ok(())
        });

    console.register().action("greet").executor(|_: &[String]| {
        println!("hello!");
        Ok(())
    });

    // Lists every registered top-level command, itself included.
    let register = console.command_register();
    console
        .register()
        .action("commands")
        .executor(move |_: &[String]| {
            let mut names = register.execution_names();
            names.sort();
            for name in names {
                println!("{name}");
            }
            Ok(())
        });
}
