//! Deck file integration tests.
//!
//! Decks are read from disk, mirrored for the second side, and fed into a
//! board.

use std::io::Write;

use queens_board::{load_deck, Board, BoardConfig, DeckError, DeckPair, Side};

const CARD_BLOCKS: [&str; 3] = [
    "Security 1 2\nXXXXX\nXXIXX\nXICIX\nXXIXX\nXXXXX\n",
    "Bee 1 1\nXXXXX\nXXXXX\nXXCXI\nXXXXX\nXXXXX\n",
    "Lancer 2 3\nXXXXX\nXXXII\nXXCXX\nXXXXX\nXXXXX\n",
];

/// Eight distinct cards, two copies each.
fn full_deck_text() -> String {
    let mut text = String::new();
    for i in 0..8 {
        let block = CARD_BLOCKS[i % CARD_BLOCKS.len()];
        let renamed = block.replacen(block.split_whitespace().next().unwrap(), &format!("Card{i}"), 1);
        text.push_str(&renamed);
        text.push('\n');
        text.push_str(&renamed);
        text.push('\n');
    }
    text
}

fn write_deck(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_from_file() {
    let file = write_deck(&full_deck_text());
    let deck = load_deck(file.path(), Side::Red).unwrap();
    assert_eq!(deck.len(), 16);
    assert!(deck.iter().all(|c| c.owner() == Side::Red));
}

#[test]
fn test_missing_file() {
    let err = load_deck("/definitely/not/here.deck", Side::Red).unwrap_err();
    assert!(matches!(err, DeckError::Io(_)));
}

#[test]
fn test_blue_copy_is_mirror_of_red() {
    let file = write_deck(&full_deck_text());
    let pair = DeckPair::load(file.path(), file.path()).unwrap();
    assert_eq!(pair.red.len(), pair.blue.len());
    for (red, blue) in pair.red.iter().zip(&pair.blue) {
        assert_eq!(red.name(), blue.name());
        assert_eq!(blue.owner(), Side::Blue);
        assert_eq!(blue.influence(), &red.influence().mirrored());
        assert_eq!(**blue, red.for_opponent());
    }
}

#[test]
fn test_third_copy_dropped() {
    let text = CARD_BLOCKS[1].repeat(3);
    let pair = DeckPair::from_text(&text).unwrap();
    assert_eq!(pair.red.len(), 2);
}

// =============================================================================
// Into a Game
// =============================================================================

#[test]
fn test_loaded_decks_start_a_game() {
    let pair = DeckPair::from_text(&full_deck_text()).unwrap();
    let mut board = Board::new(BoardConfig::new(3, 5)).unwrap();
    board.start_game(pair.red, pair.blue).unwrap();

    assert_eq!(board.hand(Side::Red)[0].name(), "Card0");
    board.place_card(0, 0, 0).unwrap();
    // Security influences its four orthogonal neighbours; only (0, 1) and
    // (1, 0) are on the board.
    assert_eq!(board.cell(0, 1).unwrap().pawn_count(), 1);
    assert_eq!(board.cell(1, 0).unwrap().pawn_count(), 2);
}

#[test]
fn test_blue_bee_points_left() {
    let pair = DeckPair::from_text(&full_deck_text()).unwrap();
    let mut board = Board::new(BoardConfig::new(3, 5)).unwrap();
    board.start_game(pair.red, pair.blue).unwrap();
    board.pass().unwrap();

    // Blue's third card is Card1 (a Bee): mirrored, it reaches two columns left.
    assert_eq!(board.current_hand()[2].name(), "Card1");
    board.place_card(2, 0, 4).unwrap();
    assert_eq!(board.cell(0, 2).unwrap().owner(), Side::Blue);
}

#[test]
fn test_too_small_deck_rejected_at_start() {
    let pair = DeckPair::from_text(&CARD_BLOCKS.concat()).unwrap();
    let mut board = Board::new(BoardConfig::new(3, 5)).unwrap();
    assert!(board.start_game(pair.red, pair.blue).unwrap_err().is_invalid_argument());
}
