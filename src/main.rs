use broadcast_standings::{
    args::Args,
    feed,
    model::{
        ranking_board::RankingBoard,
        structures::{score_mode::ScoreMode, sort_key::SortKey}
    }
};
use clap::Parser;
use lazy_static::lazy_static;
use tracing::info;

lazy_static! {
    /// Header cells in display order, each tied to the key it sorts by.
    static ref HEADER_CELLS: Vec<(SortKey, &'static str)> = vec![
        (SortKey::ByName, "Player"),
        (SortKey::ByRating, "Rating"),
        (SortKey::ByScore, "Score")
    ];
}

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    let standings = match feed::load_standings(&args.feed) {
        Ok(standings) => standings,
        Err(e) => {
            eprintln!("standings unavailable: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "round '{}' loaded with {} players",
        standings.tournament,
        standings.players.len()
    );

    let tournament = standings.tournament;
    let mut board = RankingBoard::new(standings.players);

    if let Some(column) = args.sort.as_deref() {
        let key = SortKey::try_from(column).expect("clap restricts the sort column values");
        board.apply_sort(key, false);
    }
    if args.reverse {
        board.apply_sort(board.active_key(), true);
    }

    print_table(&tournament, &board);
}

fn print_table(tournament: &str, board: &RankingBoard) {
    println!("{}", tournament);
    println!("{}", header_line(board));

    for (position, row) in board.order().iter().enumerate() {
        let rating = row
            .player
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let diff = row
            .rating_diff
            .map(|d| format!("{:+}", d))
            .unwrap_or_default();
        let points = match board.score_mode() {
            ScoreMode::Points => row.score.map(format_score).unwrap_or_else(|| "-".to_string()),
            ScoreMode::GamesPlayed => row.played.to_string()
        };

        println!(
            "{:>3}  {:<24} {:>6} {:>4} {:>6}",
            position + 1,
            row.player.name,
            rating,
            diff,
            points
        );
    }
}

/// Builds the header row, marking the active column with the direction
/// arrow. The arrow reflects the `descending` flag literally, whichever
/// column is active.
fn header_line(board: &RankingBoard) -> String {
    let cells = HEADER_CELLS
        .iter()
        .map(|(key, label)| {
            let label = match (*key, board.score_mode()) {
                (SortKey::ByScore, ScoreMode::GamesPlayed) => "Games",
                _ => *label
            };
            if *key == board.active_key() {
                let arrow = if board.descending() { "v" } else { "^" };
                format!("{}{}", label, arrow)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>();

    format!("     {:<24} {:>6}      {:>6}", cells[0], cells[1], cells[2])
}

/// Half points print as fractions of a game, whole points without the
/// trailing zero (3, 2.5, 0.5).
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}
