use super::*;

#[test]
fn counts_words_sentences_and_paragraphs() {
    let text = "Hello world. This is a test!\n\nSecond paragraph here?\nStill second.\n\n\n";
    let s = stats(text);
    assert_eq!(s.words, 11);
    assert_eq!(s.sentences, 4);
    assert_eq!(s.paragraphs, 2);
    assert_eq!(s.reading_minutes, 1);
}

#[test]
fn empty_text_is_all_zero() {
    assert_eq!(
        stats(""),
        TextStats {
            characters: 0,
            characters_no_spaces: 0,
            words: 0,
            sentences: 0,
            paragraphs: 0,
            reading_minutes: 0,
        }
    );
}

#[test]
fn character_counts_are_unicode_aware() {
    let s = stats("héllo wörld");
    assert_eq!(s.characters, 11);
    assert_eq!(s.characters_no_spaces, 10);
}

#[test]
fn reading_time_rounds_up() {
    let text = "word ".repeat(201);
    assert_eq!(stats(&text).reading_minutes, 2);
}

#[test]
fn simple_cases() {
    assert_eq!(convert_case("Hello World", Case::Upper), "HELLO WORLD");
    assert_eq!(convert_case("Hello World", Case::Lower), "hello world");
    assert_eq!(convert_case("the QUICK  brown fox", Case::Title), "The Quick  Brown Fox");
    assert_eq!(
        convert_case("hello THERE. how are you? fine", Case::Sentence),
        "Hello there. How are you? Fine"
    );
}

#[test]
fn identifier_cases() {
    assert_eq!(convert_case("Hello World again", Case::Snake), "hello_world_again");
    assert_eq!(convert_case("helloWorld-again", Case::Kebab), "hello-world-again");
    assert_eq!(convert_case("hello_world again", Case::Camel), "helloWorldAgain");
    assert_eq!(convert_case("hello world", Case::Pascal), "HelloWorld");
    assert_eq!(convert_case("  --  ", Case::Snake), "");
}

#[test]
fn case_names_deserialize() {
    let case: Case = serde_json::from_str("\"kebab\"").unwrap();
    assert_eq!(case, Case::Kebab);
}
