use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use gumdrop::Options;
use serde::Serialize;
use smol_str::SmolStr;

use multispell::config::{LanguageConfig, SpellCheckerConfig};
use multispell::speller::suggestion::Correction;
use multispell::speller::SpellChecker;
use multispell::tokenizer::Tokenize;

trait OutputWriter {
    fn write_correction(&mut self, word: &str, corrected: &str, correction: Option<&Correction>);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, corrected: &str, correction: Option<&Correction>) {
        match correction {
            Some(c) if c.is_exact() => println!("{}\t\t[CORRECT]", word),
            Some(c) => println!(
                "{}\t->\t{}\t[{}, distance {}]",
                word,
                corrected,
                c.language(),
                c.distance()
            ),
            None => println!("{}\t\t[UNKNOWN]", word),
        }
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CorrectionResult {
    word: String,
    corrected: SmolStr,
    is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    correction: Option<Correction>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<CorrectionResult>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, corrected: &str, correction: Option<&Correction>) {
        self.results.push(CorrectionResult {
            word: word.to_owned(),
            corrected: corrected.into(),
            is_correct: correction.map(|c| c.is_exact()).unwrap_or(false),
            correction: correction.cloned(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{:?}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "correct the provided words")]
    Correct(CorrectArgs),

    #[options(help = "print input in word-separated tokenized form")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct CorrectArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON file listing the languages to load")]
    config: Option<PathBuf>,

    #[options(
        short = "l",
        long = "lang",
        meta = "CODE:ALPHABET:DICT",
        help = "language to load, may be repeated"
    )]
    langs: Vec<String>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(
        short = "d",
        long = "dictionary",
        help = "show the words a dictionary source would contribute"
    )]
    is_dictionary: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_stdin() -> anyhow::Result<String> {
    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn parse_lang(arg: &str) -> anyhow::Result<LanguageConfig> {
    let mut parts = arg.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(alphabet), Some(dictionary))
            if !code.is_empty() && !alphabet.is_empty() && !dictionary.is_empty() =>
        {
            Ok(LanguageConfig {
                code: code.into(),
                alphabet: alphabet.to_string(),
                dictionary: PathBuf::from(dictionary),
            })
        }
        _ => Err(anyhow!(
            "invalid language '{}', expected CODE:ALPHABET:DICT",
            arg
        )),
    }
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs: String = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    if args.is_dictionary {
        for word in inputs.dictionary_words() {
            println!("{}", word);
        }
    } else {
        for (index, token) in inputs.word_bound_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    }

    Ok(())
}

fn correct(args: CorrectArgs) -> anyhow::Result<()> {
    let mut config = match args.config.as_ref() {
        Some(path) => SpellCheckerConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SpellCheckerConfig::default(),
    };

    for arg in args.langs.iter() {
        config.languages.push(parse_lang(arg)?);
    }

    if config.languages.is_empty() {
        bail!("no languages given, use --config or --lang");
    }

    let checker = SpellChecker::from_config(&config)?;

    let words: Vec<String> = if args.inputs.is_empty() {
        read_stdin()?.words().map(|x| x.to_string()).collect()
    } else {
        args.inputs
    };

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    for word in words {
        let correction = checker.best_correction(&word);
        let corrected = match correction.as_ref() {
            Some(c) if !c.is_exact() => c.value(),
            _ => word.as_str(),
        };
        writer.write_correction(&word, corrected, correction.as_ref());
    }

    writer.finish();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Correct(args)) => correct(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
