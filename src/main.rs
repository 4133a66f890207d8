use std::time::Duration;

use clap::Parser;
use futures::join;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gitcard::models::{GitHubStats, ThemePalette, WakaTimeSnapshot};
use gitcard::{
    Config, GitHubClient, GitHubStatsService, StatsConfig, ThemeService, WakaTimeService,
};

#[derive(Parser, Debug)]
#[command(name = "gitcard")]
#[command(version = "0.1.0")]
#[command(about = "Aggregate GitHub activity into a profile card snapshot")]
struct Args {
    /// GitHub username to aggregate stats for
    #[arg(short, long)]
    username: String,

    /// Output format (json, text)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

/// Everything the card renderer consumes, joined from the three sources.
#[derive(Debug, Serialize)]
struct CardSnapshot {
    github: GitHubStats,
    coding: WakaTimeSnapshot,
    theme: Option<ThemePalette>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitcard=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let github = GitHubStatsService::new(
        GitHubClient::new(&config.github_token, timeout)?,
        StatsConfig::from(&config),
    );
    let wakatime = WakaTimeService::new(config.wakatime_api_key.clone(), timeout)?;
    let theme = ThemeService::new(config.theme_name.clone(), timeout)?;

    tracing::info!("Aggregating card data for GitHub user: {}", args.username);

    // The three sources have no data dependency; join them once.
    let (github_stats, coding, palette) = join!(
        github.fetch_stats(&args.username),
        wakatime.fetch_stats(),
        theme.fetch_palette(),
    );

    let snapshot = CardSnapshot {
        github: github_stats,
        coding,
        theme: palette,
    };
    output_snapshot(&snapshot, &args)?;

    Ok(())
}

fn output_snapshot(snapshot: &CardSnapshot, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(snapshot)?,
        _ => format_text(snapshot),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(snapshot: &CardSnapshot) -> String {
    let mut out = String::new();
    let github = &snapshot.github;

    out.push_str(&format!("\n=== GitHub Stats: {} ===\n\n", github.user.login));

    if let Some(ref name) = github.user.name {
        out.push_str(&format!("Name: {}\n", name));
    }
    if let Some(ref bio) = github.user.bio {
        out.push_str(&format!("Bio: {}\n", bio));
    }
    out.push_str(&format!(
        "Followers: {}  Following: {}  Gists: {}\n",
        github.user.followers, github.user.following, github.user.gists
    ));
    out.push_str(&format!("Account age: {} years\n\n", github.account_age_years));

    out.push_str(&format!(
        "Repositories: {} ({} public, {} private)\n",
        github.stats.repos.total(),
        github.stats.repos.public,
        github.stats.repos.private
    ));
    out.push_str(&format!("Stars: {}\n", github.stats.stars.total()));
    out.push_str(&format!("Forks: {}\n", github.stats.forks.total()));
    out.push_str(&format!("Issues: {}\n", github.stats.issues.total()));
    out.push_str(&format!("Pull requests: {}\n", github.stats.pulls.total()));
    out.push_str(&format!("Commits: {}\n\n", github.stats.commits.total()));

    out.push_str(&format!(
        "Contributions this year: {}\n",
        github.contributions.calendar_total
    ));
    out.push_str(&format!(
        "Streak: {} current / {} longest\n",
        github.streaks.current_streak, github.streaks.longest_streak
    ));

    if !github.languages.is_empty() {
        out.push_str(&format!("Top languages: {}\n", github.languages.join(", ")));
    }

    let weekly = &snapshot.coding.weekly;
    if weekly.total_seconds > 0.0 {
        out.push_str(&format!(
            "\nCoding this week: {}\n",
            weekly.total_text.as_deref().unwrap_or("n/a")
        ));
        if let Some(ref editor) = weekly.editor {
            out.push_str(&format!("Editor: {}\n", editor));
        }
    }

    if let Some(ref palette) = snapshot.theme {
        out.push_str(&format!("\nTheme: {}\n", palette.name));
    }

    out
}
