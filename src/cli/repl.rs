//! Interactive session
//!
//! Reads one command per line from stdin, blocking on each operation.
//! Definitions accumulate in a session store until `save` or exit; a failing
//! command is reported and the loop continues.

use crate::error::Result;
use crate::http::HttpClient;
use crate::naming::NameGen;
use crate::output::{write_text_file, GENERATED_BANNER};
use crate::store::DefinitionStore;
use crate::types::JsonValue;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "typegen >> ";

const HELP: &str = "
Intended for creating TypeScript types from sampled API responses.

Usage:
  call [TYPE_NAME] <URL>    - fetch the URL, print the inferred interfaces
                              and merge them into the session
  list                      - print everything accumulated so far
  save <FILE>               - write the session to a file
  help                      - show this message

  done, q, exit             - leave the session
";

/// Interactive session state
pub struct Repl {
    client: HttpClient,
    session: DefinitionStore,
    names: NameGen,
}

impl Repl {
    /// Create a session with the given name-generation seed
    pub fn new(seed: u64) -> Self {
        Self {
            client: HttpClient::new(),
            session: DefinitionStore::new(),
            names: NameGen::new(seed),
        }
    }

    /// Run the command loop until exit or EOF
    pub async fn run(mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                println!("Please enter a command to proceed; use `help` for more information");
                continue;
            }

            let parts: Vec<&str> = input.split_whitespace().collect();
            match parts[0] {
                "call" => {
                    if let Err(e) = self.call(&parts[1..]).await {
                        println!("{e}");
                    }
                }
                "list" => print!("{}", self.session.render_to_string()),
                "save" => {
                    if let Err(e) = self.save(&parts[1..]) {
                        println!("{e}");
                    }
                }
                "done" | "q" | "exit" => break,
                _ => println!("{HELP}"),
            }
        }

        Ok(())
    }

    /// `call [name] <url>`: fetch, infer, print, merge
    async fn call(&mut self, args: &[&str]) -> Result<()> {
        let (name, url) = match args {
            [url] => (self.names.next_name(6), (*url).to_string()),
            [name, url] => ((*name).to_string(), (*url).to_string()),
            _ => {
                println!("Please specify a type name and url to call");
                return Ok(());
            }
        };

        url::Url::parse(&url)?;
        let value: JsonValue = self.client.get_json(&url).await?;
        let store = DefinitionStore::from_value(&value, &name)?;

        print!("{}", store.render_to_string());
        self.session.merge(store);
        Ok(())
    }

    /// `save <file>`: write the session with the generated-file banner
    fn save(&self, args: &[&str]) -> Result<()> {
        let [path] = args else {
            println!("Please specify a file name");
            return Ok(());
        };

        let text = format!("{}\n\n{}", GENERATED_BANNER, self.session.render_to_string());
        write_text_file(path, &text)
    }
}
