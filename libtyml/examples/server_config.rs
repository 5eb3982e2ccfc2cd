//! Parse a server configuration document and print it back out.

use libtyml::{encode, parse, EncodeOptions, Named, Template, Value};

fn main() {
    let template = Named::new(
        "Servers",
        Template::list(Template::Object(vec![
            Named::new("Name", Template::Str),
            Named::new("Port", Template::UInt16),
            Named::new("Mode", Template::enumeration(&["Http", "Https"])),
            Named::optional("MaxConnections", Template::UInt32),
        ])),
    );

    let input = "\
# Fleet configuration.
Servers:
  - Name: \"alpha\"
    Port: 8080
    Mode: https
  - Name: \"beta\"
    Port: 8081
    Mode: Http
    MaxConnections: 1024
";

    let value = match parse(&template, input) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    };

    let servers = value.get("Servers").and_then(Value::as_list).unwrap();
    for server in servers {
        println!(
            "{} listens on {} ({})",
            server.get("Name").and_then(Value::as_str).unwrap(),
            server.get("Port").and_then(Value::as_uint16).unwrap(),
            server.get("Mode").and_then(Value::as_str).unwrap(),
        );
    }

    println!("\nCanonical form:\n{}", encode(&value, &EncodeOptions::default()));
}
