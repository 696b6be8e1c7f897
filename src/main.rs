//! Command-line interface for the front end.
//!
//! Exposes the lexical analyzer over a file: tokenize a source file and
//! print or write the token dump, followed by a listing of the symbol
//! table. Parsing is not exposed here because the action/goto table is an
//! external input with no serialized form in this crate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lrfront::{LexicalAnalyzer, SymbolTable};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes a source file
    Lex {
        /// Input source file
        #[arg(short, long)]
        input: String,

        /// Write the token dump here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Also list the symbol table after lexing
        #[arg(long)]
        symbols: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Lex {
            input,
            output,
            symbols,
        } => {
            let symtab = Rc::new(RefCell::new(SymbolTable::new()));
            let mut lexer = LexicalAnalyzer::new(Rc::clone(&symtab));
            lexer
                .load_file(&input)
                .with_context(|| format!("can't read {input:?}"))?;
            lexer.run().with_context(|| format!("lexing {input:?}"))?;

            match output {
                Some(path) => lexer
                    .dump_tokens(&path)
                    .with_context(|| format!("can't write {path:?}"))?,
                None => {
                    for token in lexer.tokens() {
                        println!("{token}");
                    }
                }
            }

            if symbols {
                for entry in symtab.borrow().iter() {
                    println!("symbol {} kind {:?}", entry.name, entry.kind);
                }
            }
        }
    }

    Ok(())
}
