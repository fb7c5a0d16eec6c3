use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use seoscope::client::AnalysisClient;
use seoscope::config::ServerConfig;
use seoscope::format::{Block, format_report};
use seoscope::simulate::{self, SimulatedAnalysis};
use seoscope::server;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Serve { port, origin } => serve(port, origin).await,
        Command::Analyze {
            url,
            keyword,
            endpoint,
        } => analyze(&url, &keyword, &endpoint).await,
        Command::Demo { url, keyword, seed } => demo(&url, &keyword, seed).await,
    }
}

async fn serve(port: u16, origin: String) {
    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Google Gemini API key is missing. Set GEMINI_API_KEY in the environment.");
            std::process::exit(1);
        }
    };
    config.port = port;
    config.allowed_origin = origin;

    println!("Note: Page extraction requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default {}",
        config.webdriver_url
    );

    ::log::info!("Starting analysis server on port {}", config.port);

    if let Err(e) = server::run(config).await {
        ::log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn analyze(url: &str, keyword: &str, endpoint: &str) {
    let client = AnalysisClient::new(endpoint);

    match client.fetch_suggestions(url, keyword).await {
        Ok(report) => {
            println!("SEO Suggestions");
            print_report(&report);
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

/// Renders the opaque report text block by block
fn print_report(report: &str) {
    for block in format_report(report) {
        match block {
            Block::Heading(text) => println!("\n{}", text),
            Block::Bullet(text) => println!("  - {}", text),
            Block::Paragraph(text) => println!("{}", text),
        }
    }
}

async fn demo(url: &str, keyword: &str, seed: Option<u64>) {
    if let Err(error) = simulate::validate(url, keyword) {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    println!("Analyzing {}...", simulate::extract_domain(url));
    tokio::time::sleep(simulate::ANALYSIS_DELAY).await;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match simulate::simulate(&mut rng, url, keyword) {
        Ok(analysis) => print_analysis(&analysis),
        Err(error) => {
            // Inputs were validated above; kept for the type
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn print_analysis(analysis: &SimulatedAnalysis) {
    println!("\nOverview");
    println!("  Keyword density: {:.1}%", analysis.keyword_density);
    println!("  Readability score: {}", analysis.readability_score);
    println!("  Word count: {}", analysis.word_count);
    println!("  Page speed: {}", analysis.page_speed);

    println!("\nTechnical SEO");
    println!(
        "  Mobile friendly: {}",
        if analysis.mobile_friendly { "yes" } else { "no" }
    );
    println!(
        "  SSL secure: {}",
        if analysis.ssl_secure { "yes" } else { "no" }
    );
    println!("  Domain age: {}", analysis.domain_age);
    println!("  Images: {}", analysis.image_count);
    println!("  Internal links: {}", analysis.internal_links);
    println!("  External links: {}", analysis.external_links);

    println!("\nPage Title");
    println!("  Current:   {}", analysis.current_title);
    println!("  Suggested: {}", analysis.suggested_title);

    println!("\nMeta Description");
    println!("  Current:   {}", analysis.current_meta);
    println!("  Suggested: {}", analysis.suggested_meta);

    println!("\nHeading Structure");
    for heading in &analysis.heading_structure {
        println!("  {}", heading);
    }

    println!("\nOptimization Suggestions");
    for suggestion in &analysis.suggestions {
        println!("  - {}", suggestion);
    }

    println!("\nCompetitor Insights");
    for insight in &analysis.competitor_insights {
        println!("  - {}", insight);
    }

    println!(
        "\nSocial Signals: facebook {}, twitter {}, linkedin {}",
        analysis.social_signals.facebook,
        analysis.social_signals.twitter,
        analysis.social_signals.linkedin
    );
}
