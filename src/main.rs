use gramstash_publisher::{build_config, EnvSecrets, PostingClient, PublishResult};

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

const SAMPLE_IMAGES: [&str; 2] = [
    "https://petapixel.com/assets/uploads/2022/06/what-is-a-jpeg-featured-800x420.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/47/PNG_transparency_demonstration_1.png/280px-PNG_transparency_demonstration_1.png",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = pretty_env_logger::try_init_timed();

    info!("Loading configuration...");
    let config = build_config(&EnvSecrets::load())?;
    let client = PostingClient::new(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        println!("\n=== Single image ===");
        report(client.post_image(SAMPLE_IMAGES[0], None).await);

        println!("\n=== Multiple images ===");
        report(client.post_image(SAMPLE_IMAGES, None).await);
    } else {
        report(client.post_image(args, None).await);
    }

    Ok(())
}

fn report(result: PublishResult) {
    match result {
        PublishResult::Published { post_id, status } => {
            println!("Posted! Post ID: {}", post_id);
            println!("{}", status);
        }
        PublishResult::Failed { error } => println!("Posting failed: {}", error),
    }
}
