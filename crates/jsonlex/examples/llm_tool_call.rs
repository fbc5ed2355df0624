//! Demonstrates embedding [`jsonlex::Tokenizer`] inside a minimal
//! higher-level value builder, and reacting to content **before** the full
//! document has arrived.
//!
//! `jsonlex` only recognizes tokens; it tracks no object/array nesting and
//! builds no value. This example shows the layer a caller writes on top: a
//! small stack machine that turns the token stream into a `serde_json::Value`
//! while it streams, so it can inspect a field (here, a moderation decision)
//! as soon as that field's string token completes — without waiting for the
//! rest of the document.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonlex --example llm_tool_call
//! ```

use jsonlex::{ClosureSink, RawNumber, Token, TokenKind, TokenValue, Tokenizer, TokenizerOptions};
use serde_json::{Map, Value};

/// One level of nesting in the value being assembled. `name` is the key (if
/// any) this frame itself will be attached under in its parent object, kept
/// only so [`ValueBuilder::path_is`] can answer "are we inside
/// `moderation.decision`" without a separate path stack.
enum Frame {
    Object {
        map: Map<String, Value>,
        pending_key: Option<String>,
        name: Option<String>,
    },
    Array {
        items: Vec<Value>,
        name: Option<String>,
    },
}

/// The minimal value-builder a `jsonlex` embedder writes on top of the raw
/// token stream: a stack of in-progress containers.
#[derive(Default)]
struct ValueBuilder {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl ValueBuilder {
    /// The key, if any, that the next container or scalar pushed/attached
    /// would be stored under in the current frame.
    fn pending_key(&self) -> Option<&str> {
        match self.stack.last() {
            Some(Frame::Object { pending_key, .. }) => pending_key.as_deref(),
            _ => None,
        }
    }

    fn attach(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some(Frame::Object { map, pending_key, .. }) => {
                let key = pending_key.take().expect("value token must follow a string key");
                map.insert(key, value);
            }
            Some(Frame::Array { items, .. }) => items.push(value),
            None => self.root = Some(value),
        }
    }

    fn feed(&mut self, token: &Token<RawNumber>) {
        match (&token.kind, &token.value) {
            (TokenKind::LeftBrace, _) => {
                let name = self.pending_key().map(str::to_owned);
                self.stack.push(Frame::Object {
                    map: Map::new(),
                    pending_key: None,
                    name,
                });
            }
            (TokenKind::LeftBracket, _) => {
                let name = self.pending_key().map(str::to_owned);
                self.stack.push(Frame::Array {
                    items: Vec::new(),
                    name,
                });
            }
            (TokenKind::RightBrace, _) => {
                let Some(Frame::Object { map, .. }) = self.stack.pop() else {
                    panic!("unbalanced `}}`");
                };
                self.attach(Value::Object(map));
            }
            (TokenKind::RightBracket, _) => {
                let Some(Frame::Array { items, .. }) = self.stack.pop() else {
                    panic!("unbalanced `]`");
                };
                self.attach(Value::Array(items));
            }
            (TokenKind::String, TokenValue::String(s)) => {
                // Inside an object, a string is a key unless that frame's
                // key slot is already occupied (in which case it's a value).
                match self.stack.last_mut() {
                    Some(Frame::Object { pending_key: slot @ None, .. }) => *slot = Some(s.clone()),
                    _ => {
                        if self.path_is(&["moderation", "decision"]) && s.starts_with("block") {
                            eprintln!(
                                "moderation blocked the content, aborting before the rest of the document arrives"
                            );
                            std::process::exit(1);
                        }
                        self.attach(Value::String(s.clone()));
                    }
                }
            }
            (TokenKind::Number, TokenValue::Number(RawNumber(literal))) => {
                let number: serde_json::Number =
                    serde_json::from_str(literal).expect("tokenizer already validated the number grammar");
                self.attach(Value::Number(number));
            }
            (TokenKind::True, _) => self.attach(Value::Bool(true)),
            (TokenKind::False, _) => self.attach(Value::Bool(false)),
            (TokenKind::Null, _) => self.attach(Value::Null),
            (TokenKind::Colon | TokenKind::Comma, _) => {}
            _ => unreachable!("string/number token carried the wrong payload"),
        }
    }

    /// Whether the value about to be attached sits at exactly `path`: the
    /// names of every open frame, followed by the pending key (if any) of
    /// the innermost one.
    fn path_is(&self, path: &[&str]) -> bool {
        let frame_names = self.stack.iter().filter_map(|f| match f {
            Frame::Object { name, .. } | Frame::Array { name, .. } => name.as_deref(),
        });
        let with_pending = frame_names.chain(self.pending_key());
        with_pending.eq(path.iter().copied())
    }
}

fn main() {
    // A toy assistant response, streamed in small, irregular chunks, mirroring
    // how an LLM API delivers partial tokens. The `moderation` object arrives
    // first so a backend can decide whether to continue before the
    // potentially large `code` field arrives.
    let simulated_stream: [&str; 8] = [
        r#"{"moderation":{"decision":"al"#,
        r#"low","reason":null},"#,
        r#""filename":"example.rs","#,
        r#""language":"rust","#,
        r#""code":"fn main() {\n"#,
        r#"    println!(\"hi\");\n"#,
        r#"}\n","#,
        r#""id":7161093205057351174}"#,
    ];

    let mut builder = ValueBuilder::default();
    let mut tokenizer = Tokenizer::with_sink(
        ClosureSink::<RawNumber, _>::new(|tok| builder.feed(&tok)),
        TokenizerOptions::default(),
    );

    for chunk in simulated_stream {
        tokenizer.write(chunk.as_bytes()).expect("tokenizer error");
    }
    tokenizer.end().expect("incomplete document");

    let value = builder.root.expect("a root value was assembled");
    insta::assert_snapshot!(serde_json::to_string_pretty(&value).unwrap(), @r#"
    {
      "moderation": {
        "decision": "allow",
        "reason": null
      },
      "filename": "example.rs",
      "language": "rust",
      "code": "fn main() {\n    println!(\"hi\");\n}\n",
      "id": 7161093205057351174
    }
    "#);
}
