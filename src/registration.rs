use log::debug;
use scraper::Html;

use crate::domain::{Match, Player, PlayerId};
use crate::errors::{Result, TournamentError};
use crate::repository::{MatchWriter, PlayerRegistry};

/// Strip markup from a submitted player name, keeping the text inside tags.
///
/// The result is HTML-safe: `&`, `<` and `>` left in the text are escaped, so
/// sanitizing an already sanitized name returns it unchanged. Runs of
/// whitespace collapse to single spaces.
pub fn sanitize_name(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();

    escape_text(&text.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Sanitize the name and register a new player. Names need not be unique.
pub fn register_player<R: PlayerRegistry + ?Sized>(registry: &R, raw_name: &str) -> Result<Player> {
    let name = sanitize_name(raw_name);
    if name.is_empty() {
        return Err(TournamentError::EmptyPlayerName);
    }

    registry.add_player(&name)
}

/// Record the outcome of a single match
pub fn record_match<W: MatchWriter + ?Sized>(
    writer: &W,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<Match> {
    let recorded = writer.insert_match(winner, loser)?;

    debug!("Match {} recorded: {} beat {}", recorded.id, winner, loser);
    Ok(recorded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(sanitize_name("<b>Bob</b>"), "Bob");
        assert_eq!(sanitize_name("<i>Jane</i> <u>Doe</u>"), "Jane Doe");
        assert_eq!(sanitize_name("<a href=\"http://x\">Link</a>er"), "Linker");
    }

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_name("Chandra Nalaar"), "Chandra Nalaar");
        assert_eq!(sanitize_name("Shannon O'Neil"), "Shannon O'Neil");
        assert_eq!(sanitize_name("  Markov   Chaney \n"), "Markov Chaney");
    }

    #[test]
    fn test_sanitize_keeps_entities_escaped() {
        assert_eq!(sanitize_name("Tom &amp; Jerry"), "Tom &amp; Jerry");
        assert_eq!(sanitize_name("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(sanitize_name("a < b"), "a &lt; b");
    }

    #[test]
    fn test_escaped_markup_does_not_become_tags() {
        let once = sanitize_name("&lt;script&gt;alert(1)&lt;/script&gt;");

        assert_eq!(once, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert!(!once.contains('<'));
    }

    #[test]
    fn test_sanitize_is_stable_when_repeated() {
        let inputs = [
            "<b>Bob</b>",
            "Tom &amp; Jerry",
            "&lt;i&gt;Ivy&lt;/i&gt;",
            "  Shannon   O'Neil <br/>",
            "x &lt; y &gt; z",
        ];
        for input in inputs {
            let once = sanitize_name(input);
            assert_eq!(sanitize_name(&once), once);
            assert!(!once.contains('<'));
        }
    }

    #[test]
    fn test_register_stores_sanitized_name() {
        let repo = MemoryRepository::new();

        let player = register_player(&repo, "<em>Bruno</em>   Walton").unwrap();

        assert_eq!(player.name, "Bruno Walton");
        assert_eq!(repo.player_count().unwrap(), 1);
    }

    #[test]
    fn test_register_rejects_markup_only_name() {
        let repo = MemoryRepository::new();

        let err = register_player(&repo, "<br/> <p></p>").unwrap_err();

        assert!(matches!(err, TournamentError::EmptyPlayerName));
        assert_eq!(repo.player_count().unwrap(), 0);
    }

    #[test]
    fn test_record_match_passes_through_to_writer() {
        let repo = MemoryRepository::new();
        let winner = register_player(&repo, "Winner").unwrap();
        let loser = register_player(&repo, "Loser").unwrap();

        let recorded = record_match(&repo, winner.id, loser.id).unwrap();

        assert_eq!((recorded.winner, recorded.loser), (winner.id, loser.id));
        assert_eq!(repo.matches().unwrap(), vec![recorded]);
    }
}
