use search_core::tokenizer::{split_into_words, validate_word};
use search_core::{DocumentStatus, ErrorKind, SearchServer, StopWords};

#[test]
fn it_splits_on_single_spaces() {
    let words = split_into_words("funny  pet with curly hair ");
    assert_eq!(words, vec!["funny", "pet", "with", "curly", "hair"]);
}

#[test]
fn it_validates_every_path() {
    assert_eq!(validate_word("ta\u{0}il").unwrap_err().kind(), ErrorKind::InvalidFormat);

    // stop words, from either constructor
    assert_eq!(StopWords::new(["and", "w\u{1}th"]).unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(SearchServer::from_stop_words_text("and w\u{1}th").unwrap_err().kind(), ErrorKind::InvalidFormat);

    // document text
    let mut server = SearchServer::new(["and"]).unwrap();
    let err = server.add_document(1, "cat\u{1b} dog", DocumentStatus::Actual, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);

    // query text
    server.add_document(1, "cat dog", DocumentStatus::Actual, &[]).unwrap();
    assert_eq!(server.find_top_documents("cat d\u{1f}g").unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(server.match_document("cat d\u{1f}g", 1).unwrap_err().kind(), ErrorKind::InvalidFormat);
}

#[test]
fn it_filters_stopwords_from_index_and_query() {
    let mut server = SearchServer::from_stop_words_text("in the").unwrap();
    server.add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();

    assert!(server.index().is_stop_word("the"));
    assert!(server.index().postings_for("in").is_empty());
    assert_eq!(server.index().postings_for("cat").get(&42), Some(&0.5));

    // a query made only of stop words matches nothing
    assert!(server.find_top_documents("in the").unwrap().is_empty());
    assert_eq!(server.find_top_documents("in city").unwrap()[0].id, 42);
}
