use clap::{Parser, Subcommand};

mod dgst;
mod enc;
mod hex;

/// gmsm command-line tool for Chinese national cryptographic algorithms.
#[derive(Parser)]
#[command(name = "gmsm")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SM3 digest of a file.
    Dgst {
        /// Input file (use - for stdin).
        file: String,
    },
    /// SM4-ECB encryption/decryption of a file.
    Enc {
        /// 128-bit key as 32 hex characters.
        #[arg(short, long)]
        key: String,
        /// Decrypt mode.
        #[arg(short, long)]
        decrypt: bool,
        /// Input file.
        #[arg(short, long)]
        input: String,
        /// Output file.
        #[arg(short, long)]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Dgst { file } => dgst::run(file),
        Commands::Enc {
            key,
            decrypt,
            input,
            output,
        } => enc::run(key, *decrypt, input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
