use scpattr::{AttributeList, Encoding};
use std::fs;

fn main() {
    pretty_env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: dump <record files>");
        std::process::exit(1);
    }

    for path in paths {
        println!("== {}", path);
        if let Err(e) = dump_file(&path) {
            eprintln!("cannot dump {} = {}", path, e);
        }
    }
}

fn dump_file(path: &str) -> Result<(), String> {
    let content = fs::read(path).map_err(|e| format!("{}", e))?;
    let list = AttributeList::decode_from(&content, Encoding::little_endian_explicit())
        .map_err(|e| format!("{}", e))?;

    for attribute in list.iter() {
        let tag = attribute.tag();
        let keyword = tag.keyword().unwrap_or("?");
        let rendered = match attribute.string_values() {
            Ok(values) => values.join("\\"),
            // opaque values: show the size instead of the bytes
            Err(_) => match attribute.byte_values() {
                Ok(bytes) => format!("<{} bytes>", bytes.len()),
                Err(e) => format!("<{}>", e),
            },
        };
        println!("{} {} {}: {}", tag, attribute.vr().code(), keyword, rendered);
    }

    Ok(())
}
