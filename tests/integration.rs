//! Integration tests for the piglet transformation engine.

use piglet::transform;

/// Test that re-running the transform on its own output changes nothing.
#[test]
fn test_transform_is_stable() {
    let input = "The cows grazed while a goose and many sheep watched.";
    let first_pass = transform(input);
    let second_pass = transform(&first_pass);

    assert_eq!(
        first_pass, second_pass,
        "Transformed output should contain no further lexicon words"
    );
}

/// Test a complete passage mixing plural, singular, and ambiguous forms.
#[test]
fn test_complete_passage() {
    let input = "On the farm, there were many animals. \n\
                 The cows grazed in the field, while the pigs played in the mud.\n\
                 A chicken and its chicks pecked at the ground, and the horses ran freely.\n\
                 Even the sheep seemed happy, and the goats climbed on everything.\n";
    let expected = "On the farm, there were many animals. \n\
                    The piglets grazed in the field, while the piglets played in the mud.\n\
                    A piglet and its chicks pecked at the ground, and the piglets ran freely.\n\
                    Even the piglet seemed happy, and the piglets climbed on everything.\n";

    assert_eq!(transform(input), expected);
}

/// Test that every capitalization style survives replacement.
#[test]
fn test_capitalization_styles() {
    assert_eq!(
        transform("cow Cow COW cOw CoW are different capitalizations."),
        "piglet Piglet PIGLET piglet Piglet are different capitalizations."
    );
    assert_eq!(
        transform("cows Cows COWS are plural forms."),
        "piglets Piglets PIGLETS are plural forms."
    );
    assert_eq!(
        transform("cows CHICKENS Horses pIgS are different animals."),
        "piglets PIGLETS Piglets piglets are different animals."
    );
}

/// Test ambiguous spellings in list pairings and with casing mixed in.
#[test]
fn test_ambiguous_pairings() {
    assert_eq!(
        transform("Cow and cow. SHEEP and sheep."),
        "Piglet and piglet. PIGLET and piglet."
    );
}

/// Test animals at the beginning, middle, and end of sentences.
#[test]
fn test_positions_within_sentences() {
    assert_eq!(
        transform("Cow is here. The farmer feeds the chicken. Look at that sheep!"),
        "Piglet is here. The farmer feeds the piglet. Look at that piglet!"
    );
}

/// Test that embedded lexicon words are left alone.
#[test]
fn test_no_replacement_inside_larger_words() {
    let input = "The cowbell and the pigpen are not animals.";
    assert_eq!(transform(input), input);
}

/// Test every animal in the lexicon, singular and plural.
#[test]
fn test_whole_lexicon() {
    let input = "pig pigs cow cows chicken chickens rooster roosters hen hens \
                 duck ducks goose geese lamb lambs goat goats horse horses \
                 donkey donkeys mule mules turkey turkeys rabbit rabbits";
    let output = transform(input);

    assert!(!output.contains("goose"), "goose left in: {output}");
    assert!(!output.contains("geese"), "geese left in: {output}");
    let words: Vec<&str> = output.split_whitespace().collect();
    assert!(
        words.iter().all(|w| *w == "piglet" || *w == "piglets"),
        "unexpected residue in: {output}"
    );
}

/// Test empty and whitespace-only input.
#[test]
fn test_degenerate_input() {
    assert_eq!(transform(""), "");
    assert_eq!(transform("   \n\n   "), "   \n\n   ");
}
