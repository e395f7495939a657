use recipe_picker::api_connection::connection::ChefApiError;
use recipe_picker::api_connection::endpoints::{
    ChatCompletionRequest, ChatMessage, ResponseFormat, DEEPSEEK_CHAT_MODEL,
};
use recipe_picker::chef::{parse_explore_reply, ExploreReply};
use serde_json::json;

#[test]
fn list_reply_parses() {
    let reply = parse_explore_reply(r#"{"type":"list","items":["宫保鸡丁","麻婆豆腐"]}"#).unwrap();
    assert_eq!(
        reply,
        ExploreReply::List {
            items: vec!["宫保鸡丁".to_string(), "麻婆豆腐".to_string()]
        }
    );
}

#[test]
fn instruction_reply_parses() {
    let reply =
        parse_explore_reply(r#"{"type":"instruction","content":"【一人份食材】..."}"#).unwrap();
    assert_eq!(
        reply,
        ExploreReply::Instruction {
            content: "【一人份食材】...".to_string()
        }
    );
}

#[test]
fn list_reply_without_items_defaults_to_empty() {
    let reply = parse_explore_reply(r#"{"type":"list"}"#).unwrap();
    assert_eq!(reply, ExploreReply::List { items: vec![] });
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let reply = parse_explore_reply("  {\"type\":\"list\",\"items\":[]}\n").unwrap();
    assert_eq!(reply, ExploreReply::List { items: vec![] });
}

#[test]
fn missing_discriminant_is_malformed() {
    let err = parse_explore_reply(r#"{"items":["宫保鸡丁"]}"#).unwrap_err();
    assert!(matches!(err, ChefApiError::MalformedReply(_)));
}

#[test]
fn unknown_discriminant_is_malformed() {
    let err = parse_explore_reply(r#"{"type":"poem","content":"..."}"#).unwrap_err();
    assert!(matches!(err, ChefApiError::MalformedReply(_)));
}

#[test]
fn plain_text_is_malformed() {
    let err = parse_explore_reply("好的，这就为您推荐几道菜！").unwrap_err();
    assert!(matches!(err, ChefApiError::MalformedReply(_)));
    assert_eq!(err.to_string(), "AI 返回格式异常，请重试");
}

#[test]
fn request_body_matches_the_wire_contract() {
    let request = ChatCompletionRequest {
        model: DEEPSEEK_CHAT_MODEL.to_string(),
        messages: vec![
            ChatMessage::system("你是一位严谨的专业大厨，擅长量化烹饪。"),
            ChatMessage::user("宫保鸡丁怎么做？"),
        ],
        stream: false,
        max_tokens: Some(1024),
        temperature: Some(0.7),
        response_format: None,
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["stream"], json!(false));
    assert_eq!(body["max_tokens"], json!(1024));
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    // Unset optional fields stay off the wire.
    assert!(body.get("response_format").is_none());
}

#[test]
fn structured_mode_requests_a_json_object() {
    let request = ChatCompletionRequest {
        model: DEEPSEEK_CHAT_MODEL.to_string(),
        messages: vec![ChatMessage::user("土豆 牛肉")],
        stream: false,
        max_tokens: Some(1500),
        temperature: Some(0.7),
        response_format: Some(ResponseFormat::json_object()),
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["response_format"]["type"], "json_object");
}

#[test]
fn server_message_wins_in_user_facing_errors() {
    let err = ChefApiError::Api {
        status: reqwest::StatusCode::UNAUTHORIZED,
        message: "Authentication Fails".to_string(),
    };
    assert_eq!(err.user_message("兜底文案"), "Authentication Fails");

    let err = ChefApiError::Api {
        status: reqwest::StatusCode::BAD_GATEWAY,
        message: String::new(),
    };
    assert_eq!(err.user_message("兜底文案"), "兜底文案");

    assert_eq!(
        ChefApiError::EmptyReply.user_message("兜底文案"),
        "兜底文案"
    );
}
