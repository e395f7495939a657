use serde::{Deserialize, Serialize};

use crate::api_connection::connection::{call_chat_completion, ChefApiError};
use crate::api_connection::endpoints::{
    ChatCompletionRequest, ChatMessage, ResponseFormat, DEEPSEEK_CHAT_MODEL,
};

/// The two reply shapes the explore prompt allows. Anything else coming back
/// from the model is a `MalformedReply`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExploreReply {
    List {
        #[serde(default)]
        items: Vec<String>,
    },
    Instruction {
        content: String,
    },
}

/// Ask for a single-serving recipe with gram/ml quantities, short steps and
/// one pitfall note. The assistant text is returned verbatim; nothing
/// downstream parses it.
pub async fn fetch_cooking_instructions(
    recipe_name: &str,
    api_key: &str,
) -> Result<String, ChefApiError> {
    if api_key.trim().is_empty() {
        return Err(ChefApiError::MissingApiKey);
    }

    let prompt = format!(
        "我是厨房新手，请告诉我【{}】的**一人份**详细做法。\n\
要求：\n\
1. 食材和调料用量必须**精确到克(g)或毫升(ml)**，不要用\"适量\"、\"少许\"。\n\
2. 步骤简明扼要。\n\
3. 提供1个核心避坑点。\n\n\
请严格按照以下格式回答：\n\
【一人份食材】\n\
- ... (精确重量)\n\
【步骤】\n\
1. ...\n\
2. ...\n\
【避坑】\n\
...",
        recipe_name
    );

    let request = ChatCompletionRequest {
        model: DEEPSEEK_CHAT_MODEL.to_string(),
        messages: vec![
            ChatMessage::system("你是一位严谨的专业大厨，擅长量化烹饪。"),
            ChatMessage::user(prompt),
        ],
        stream: false,
        max_tokens: Some(1024),
        temperature: Some(0.7),
        response_format: None,
    };

    let response = call_chat_completion(api_key, request).await?;
    match response.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content),
        None => Err(ChefApiError::EmptyReply),
    }
}

/// Classify free-text input as an ingredient list (reply: dish suggestions)
/// or a dish name (reply: direct instructions). The model is asked for a
/// bare JSON object; the reply is parsed strictly into [`ExploreReply`].
pub async fn explore_kitchen(input: &str, api_key: &str) -> Result<ExploreReply, ChefApiError> {
    if api_key.trim().is_empty() {
        return Err(ChefApiError::MissingApiKey);
    }

    let prompt = format!(
        "分析用户输入: \"{}\"。\n\n\
任务逻辑：\n\
1. 如果输入像是**食材列表**（如\"土豆 牛肉\"、\"鸡蛋\"）：\n\
   请推荐 3-5 道适合用这些食材制作的菜名。\n\
   返回格式：JSON Object {{ \"type\": \"list\", \"items\": [\"菜名1\", \"菜名2\", ...] }}\n\n\
2. 如果输入像是**具体菜名**（如\"红烧肉\"、\"清蒸鱼\"）：\n\
   请直接提供一人份的精确烹饪步骤（要求同上：精确到克，简明步骤）。\n\
   返回格式：JSON Object {{ \"type\": \"instruction\", \"content\": \"...(烹饪步骤文本)...\" }}\n\n\
注意：**必须只返回 JSON 字符串**，不要包含 markdown 标记或其他文本。",
        input
    );

    let request = ChatCompletionRequest {
        model: DEEPSEEK_CHAT_MODEL.to_string(),
        messages: vec![
            ChatMessage::system("你是一个智能厨房助手。请严格输出 JSON 格式。"),
            ChatMessage::user(prompt),
        ],
        stream: false,
        max_tokens: Some(1500),
        temperature: Some(0.7),
        response_format: Some(ResponseFormat::json_object()),
    };

    let response = call_chat_completion(api_key, request).await?;
    let content = match response.choices.into_iter().next() {
        Some(choice) => choice.message.content,
        None => return Err(ChefApiError::EmptyReply),
    };

    parse_explore_reply(&content)
}

/// Strict parse of the assistant text into the tagged union. Kept separate
/// from the network call so the contract is testable offline.
pub fn parse_explore_reply(content: &str) -> Result<ExploreReply, ChefApiError> {
    serde_json::from_str::<ExploreReply>(content.trim()).map_err(ChefApiError::MalformedReply)
}
