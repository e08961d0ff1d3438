use crate::commandline_parser::ArgumentParser;
use crate::translator::Translator;

mod commandline_parser;
mod generator;
mod parsing;
mod semantics;
mod translator;


const DEFAULT_TABLE_FILE: &str = "parse_table.csv";

fn main() {
    let mut arg_parser = ArgumentParser::new();

    let program = if let Some(file_name) = arg_parser.get_parameter("--infile") {
        let file_contents = std::fs::read_to_string(&file_name);
        if file_contents.is_err() {
            panic!("File {file_name} can not be opened")
        } else {
            file_contents.unwrap().replace("\r\n", "\n")
        }
    } else {
        panic!("missing --infile tag");
    };

    let out_file = if let Some(file_name) = arg_parser.get_parameter("--outfile") {
        file_name
    } else {
        panic!("missing --outfile tag");
    };

    let table_file = arg_parser
        .get_parameter("--table")
        .unwrap_or_else(|| String::from(DEFAULT_TABLE_FILE));
    let table_text = std::fs::read_to_string(&table_file);
    if table_text.is_err() {
        panic!("Transition table {table_file} can not be opened")
    }

    let show_parsed = arg_parser.contains("--showparsed");

    let translator = match Translator::build(&table_text.unwrap()) {
        Ok(translator) => translator,
        Err(err) => {
            eprintln!("Error loading transition table: {err}");
            std::process::exit(1);
        },
    };

    match translator.translate(&program) {
        Ok(result) => {
            if show_parsed {
                for kind in &result.derivation {
                    println!("{kind}");
                }
            }

            if let Err(err) = std::fs::write(&out_file, result.output) {
                eprintln!("Could not write {out_file}: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        },
    }
}
