//! Integration tests for [`search_bot::SearchCommandHandler`] with a recording bot and fixed
//! pipeline adapters.
//!
//! Covers: each command's reply, chunked delivery order and formats, non-command passthrough,
//! commands addressed to other bots, delivery failure, and the full handler chain.

use std::sync::Arc;

use dbot_core::{DbotError, Handler, HandlerError, HandlerResponse};
use query_pipeline::{Phrase, TELEGRAM_MAX_MESSAGE_CHARS};
use search_bot::{build_handler_chain, SearchCommandHandler};

use fakes::{
    message, pipeline, BrokenTranslator, FixedSummarizer, IdentityTranslator, RecordingBot,
};

fn username(name: Option<&str>) -> Arc<tokio::sync::RwLock<Option<String>>> {
    Arc::new(tokio::sync::RwLock::new(name.map(String::from)))
}

fn handler_with(
    summary: &str,
    bot: &Arc<RecordingBot>,
) -> (SearchCommandHandler, Arc<IdentityTranslator>, Arc<FixedSummarizer>) {
    let translator = Arc::new(IdentityTranslator::default());
    let summarizer = Arc::new(FixedSummarizer::text(summary));
    let handler = SearchCommandHandler::new(
        pipeline(translator.clone(), summarizer.clone()),
        bot.clone(),
        username(Some("VictoryBot")),
    );
    (handler, translator, summarizer)
}

/// **Test: /search sends the formatted bullets as one plain message and replies with them.**
#[tokio::test]
async fn search_sends_bullets() {
    let bot = Arc::new(RecordingBot::new());
    let (handler, translator, summarizer) = handler_with("* heading\nFact one\nFact two", &bot);

    let response = handler
        .handle(&message("/search Subject: Biology | Chapter: Cell Biology"))
        .await
        .unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply("• Fact one\n• Fact two".to_string())
    );
    assert_eq!(
        bot.sent(),
        vec![(1001, "• Fact one\n• Fact two".to_string(), false)]
    );
    assert_eq!(summarizer.call_count(), 1);
    // query plus one call per bullet
    assert_eq!(translator.call_count(), 3);
}

/// **Test: /search without a topic sends the usage message as Markdown, with no remote calls.**
#[tokio::test]
async fn empty_search_sends_markdown_usage() {
    let bot = Arc::new(RecordingBot::new());
    let (handler, translator, summarizer) = handler_with("unused", &bot);

    handler.handle(&message("/search   ")).await.unwrap();

    assert_eq!(
        bot.sent(),
        vec![(1001, Phrase::SearchUsage.text("hi").to_string(), true)]
    );
    assert_eq!(translator.call_count(), 0);
    assert_eq!(summarizer.call_count(), 0);
}

/// **Test: /start sends the greeting passed through the translator; /help the fixed help text.**
#[tokio::test]
async fn start_and_help() {
    let bot = Arc::new(RecordingBot::new());
    let (handler, translator, _) = handler_with("unused", &bot);

    handler.handle(&message("/start")).await.unwrap();
    handler.handle(&message("/help@VictoryBot")).await.unwrap();

    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].1, Phrase::Greeting.text("en"));
    assert_eq!(sent[1].1, Phrase::Help.text("hi"));
    assert_eq!(translator.call_count(), 1);
}

/// **Test: a failed greeting translation is reported to the user instead of dropped.**
#[tokio::test]
async fn start_reports_translation_failure() {
    let bot = Arc::new(RecordingBot::new());
    let handler = SearchCommandHandler::new(
        pipeline(
            Arc::new(BrokenTranslator),
            Arc::new(FixedSummarizer::text("unused")),
        ),
        bot.clone(),
        username(None),
    );

    handler.handle(&message("/start")).await.unwrap();

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.starts_with("Error: translation failed:"));
}

/// **Test: plain text and commands for other bots pass through without any send.**
#[tokio::test]
async fn non_commands_continue() {
    let bot = Arc::new(RecordingBot::new());
    let (handler, _, summarizer) = handler_with("Fact", &bot);

    for text in ["hello there", "/search@OtherBot cells", "/weather Delhi"] {
        let response = handler.handle(&message(text)).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue);
    }

    assert!(bot.sent().is_empty());
    assert_eq!(summarizer.call_count(), 0);
}

/// **Test: a response longer than one message is delivered as ordered chunks that rebuild it.**
#[tokio::test]
async fn long_response_is_chunked_in_order() {
    let line = "ज".repeat(99);
    let summary = vec![line.as_str(); 100].join("\n");
    let bot = Arc::new(RecordingBot::new());
    let (handler, _, _) = handler_with(&summary, &bot);

    let response = handler.handle(&message("/search cells")).await.unwrap();

    let expected = vec![format!("• {}", line); 100].join("\n");
    let total_chars = expected.chars().count();
    let sent = bot.sent();
    assert_eq!(sent.len(), total_chars.div_ceil(TELEGRAM_MAX_MESSAGE_CHARS));
    assert!(sent
        .iter()
        .all(|(_, text, _)| text.chars().count() <= TELEGRAM_MAX_MESSAGE_CHARS));
    let rebuilt: String = sent.iter().map(|(_, text, _)| text.as_str()).collect();
    assert_eq!(rebuilt, expected);
    assert_eq!(response, HandlerResponse::Reply(expected));
}

/// **Test: summarizer failure sends exactly one error message.**
#[tokio::test]
async fn summary_failure_sends_single_error() {
    let bot = Arc::new(RecordingBot::new());
    let handler = SearchCommandHandler::new(
        pipeline(
            Arc::new(IdentityTranslator::default()),
            Arc::new(FixedSummarizer::transport_error("Gemini API error (503): overloaded")),
        ),
        bot.clone(),
        username(None),
    );

    handler.handle(&message("/search cells")).await.unwrap();

    assert_eq!(
        bot.sent(),
        vec![(
            1001,
            "Error: Gemini API error (503): overloaded".to_string(),
            false
        )]
    );
}

/// **Test: a failed send stops delivery; later chunks are not attempted.**
#[tokio::test]
async fn delivery_stops_at_first_failure() {
    let summary = vec!["x".repeat(1000); 10].join("\n");
    let bot = Arc::new(RecordingBot::failing_from(1));
    let (handler, _, _) = handler_with(&summary, &bot);

    let err = handler.handle(&message("/search cells")).await.unwrap_err();

    match err {
        DbotError::Handler(HandlerError::Delivery { sent, total, .. }) => {
            assert_eq!(sent, 1);
            assert_eq!(total, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(bot.sent().len(), 1);
    assert_eq!(bot.attempts(), 2);
}

/// **Test: the assembled chain (logging + command handler) replies to /search.**
#[tokio::test]
async fn assembled_chain_replies() {
    let bot = Arc::new(RecordingBot::new());
    let chain = build_handler_chain(
        pipeline(
            Arc::new(IdentityTranslator::default()),
            Arc::new(FixedSummarizer::text("Fact one")),
        ),
        bot.clone(),
        username(Some("VictoryBot")),
    );

    let response = chain.handle(&message("/search cells")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("• Fact one".to_string()));
    assert_eq!(chain.len(), 2);
    assert_eq!(bot.sent().len(), 1);
}
