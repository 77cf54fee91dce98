//! Resolves the tags of one digest.
//!
//! Run with: cargo run --example resolve -- <registry> <repository> <digest>

use libtagscope::{Client, Registry, TagResolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(registry), Some(repository), Some(digest)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: resolve <registry> <repository> <digest>");
        std::process::exit(2);
    };

    let resolver = TagResolver::new(Registry::new(&registry)?, Client::new()?);

    // lookup() tells "not listed" apart from "listed without tags".
    match resolver.lookup(&repository, &digest).await? {
        Some(record) if record.tag.is_empty() => {
            println!("{}@{} has no tags", repository, digest);
        }
        Some(record) => {
            for tag in record.tag {
                println!("{}:{}", repository, tag);
            }
        }
        None => println!("{} is not listed in {}", digest, repository),
    }

    Ok(())
}
