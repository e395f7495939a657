use anyhow::Result;
use std::io::{self, BufRead, Write};

use recipe_picker::catalog::{category_icon, CategoryIcon};
use recipe_picker::chef;
use recipe_picker::cli::parse_args;
use recipe_picker::controller::{
    ActionOutcome, AiRequest, AppController, AppMode, SPIN_INTERVAL,
};
use recipe_picker::recipe::{Recipe, CATEGORIES};
use recipe_picker::reveal::{Typewriter, REVEAL_INTERVAL};
use recipe_picker::storage::FileStore;
use recipe_picker::store::RecipeStore;

type Controller = AppController<FileStore>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = parse_args();

    let storage = FileStore::new(&cli.data_dir);
    let mut controller = Controller::new(RecipeStore::load(storage));

    // Seed the credential from the environment when storage has none.
    if controller.api_key().is_empty() {
        if let Ok(key) = std::env::var("DEEPSEEK_API_KEY") {
            controller.save_api_key(key)?;
        }
    }

    println!("今天吃什么 — 个人菜谱助手");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }
        if let Err(e) = dispatch(&mut controller, line).await {
            eprintln!("出错了: {}", e);
        }
    }
    Ok(())
}

async fn dispatch(controller: &mut Controller, line: &str) -> Result<()> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "help" | "h" => print_help(),
        "random" | "r" => run_randomize(controller).await,
        "search" | "s" => {
            controller.switch_mode(AppMode::Filter);
            controller.set_search_query(rest);
            controller.search();
            if controller.search_results().is_empty() {
                println!("没有发现相关菜肴");
            } else {
                for (idx, recipe) in controller.search_results().iter().enumerate() {
                    println!("{:>3}. {}", idx + 1, recipe_line(recipe));
                }
                println!("用 `pick <序号>` 查看详情。");
            }
        }
        "pick" => {
            let picked = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| controller.search_results().get(n.wrapping_sub(1)).cloned());
            match picked {
                Some(recipe) => {
                    controller.select_recipe(recipe);
                    print_selected(controller);
                }
                None => println!("无效的序号"),
            }
        }
        "explore" | "e" => {
            controller.switch_mode(AppMode::Explore);
            controller.set_explore_input(rest);
            let outcome = controller.explore();
            run_outcome(controller, outcome).await;
        }
        "take" => {
            let name = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| controller.explore_results().get(n.wrapping_sub(1)).cloned());
            match name {
                Some(name) => {
                    controller.select_suggestion(&name, &mut rand::thread_rng())?;
                    print_selected(controller);
                }
                None => println!("无效的序号"),
            }
        }
        "teach" | "t" => {
            let outcome = controller.teach_me();
            run_outcome(controller, outcome).await;
        }
        "retry" => {
            let outcome = controller.retry();
            run_outcome(controller, outcome).await;
        }
        "list" | "l" => print_catalog(controller),
        "add" => {
            let mut parts = rest.splitn(3, '|').map(str::trim);
            let name = parts.next().unwrap_or("");
            let ingredients = parts.next().unwrap_or("");
            let category = parts.next().filter(|c| !c.is_empty()).unwrap_or(CATEGORIES[3]);
            match controller.add_recipe(name, ingredients, category, &mut rand::thread_rng())? {
                Some(id) => println!("已加入私房菜（id: {}）", id),
                None => println!("菜名不能为空。格式: add 菜名 | 食材 食材 | 分类"),
            }
        }
        "del" => {
            if controller.request_delete(rest) {
                println!("确认删除？删除后这道私房菜将无法恢复。(confirm / cancel)");
            } else {
                println!("只有私房菜可以删除");
            }
        }
        "confirm" => {
            if controller.pending_delete().is_some() {
                controller.confirm_delete()?;
                println!("已删除");
            }
        }
        "cancel" => controller.cancel_delete(),
        "key" => {
            controller.save_api_key(rest.to_string())?;
            println!("API Key 已保存（仅保存在本地）");
        }
        _ => println!("未知命令，输入 help 查看用法"),
    }
    Ok(())
}

async fn run_randomize(controller: &mut Controller) {
    controller.switch_mode(AppMode::Random);
    if !controller.randomize(&mut rand::thread_rng()) {
        println!("菜谱是空的，先 add 几道菜吧");
        return;
    }
    while controller.spin_tick(&mut rand::thread_rng()) {
        if let Some(recipe) = controller.selected() {
            print!("\r  …… {:<20}", recipe.name);
            let _ = io::stdout().flush();
        }
        tokio::time::sleep(SPIN_INTERVAL).await;
    }
    println!();
    print_selected(controller);
}

async fn run_outcome(controller: &mut Controller, outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Idle => {}
        ActionOutcome::NeedsCredential => {
            println!("尚未设置 DeepSeek API Key，请先执行: key <你的 API Key>");
        }
        ActionOutcome::Call(call) => {
            let api_key = controller.api_key().to_string();
            println!("AI 大厨正在精确计算配料...");
            match &call.request {
                AiRequest::Instructions { recipe_name } => {
                    let result = chef::fetch_cooking_instructions(recipe_name, &api_key).await;
                    controller.finish_instructions(call.token, result);
                }
                AiRequest::Explore { input } => {
                    let result = chef::explore_kitchen(input, &api_key).await;
                    controller.finish_explore(call.token, result);
                }
            }
            render_ai_state(controller).await;
        }
    }
}

async fn render_ai_state(controller: &Controller) {
    if let Some(error) = controller.ai_error() {
        println!("哎呀，出错了: {}", error);
        println!("输入 retry 重试");
        return;
    }
    if let Some(content) = controller.ai_content() {
        type_out(content).await;
        return;
    }
    if !controller.explore_results().is_empty() {
        println!("为您推荐:");
        for (idx, name) in controller.explore_results().iter().enumerate() {
            println!("{:>3}. {}", idx + 1, name);
        }
        println!("用 `take <序号>` 加入并查看。");
    }
}

/// Character-by-character reveal of the AI text.
async fn type_out(text: &str) {
    let mut typewriter = Typewriter::new(text);
    while let Some(ch) = typewriter.tick() {
        print!("{}", ch);
        let _ = io::stdout().flush();
        tokio::time::sleep(REVEAL_INTERVAL).await;
    }
    println!();
}

fn print_selected(controller: &Controller) {
    if let Some(recipe) = controller.selected() {
        println!("今晚就吃: {}", recipe_line(recipe));
        println!("输入 teach 让 DeepSeek 教你做（一人份）");
    }
}

fn recipe_line(recipe: &Recipe) -> String {
    let badge = if recipe.is_custom { " [私房]" } else { "" };
    format!("{}{} ({})", recipe.name, badge, recipe.ingredients.join(" "))
}

fn print_catalog(controller: &Controller) {
    for (category, members) in controller.grouped() {
        println!("{} {}", icon_marker(category_icon(&category)), category);
        for recipe in &members {
            println!("    {:<14} {}", recipe.id, recipe_line(recipe));
        }
    }
}

fn icon_marker(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::Beef => "🥩",
        CategoryIcon::Pork => "🔥",
        CategoryIcon::Chicken => "🍗",
        CategoryIcon::Sparkles => "✨",
        CategoryIcon::Egg => "🍳",
    }
}

fn print_help() {
    println!("命令:");
    println!("  random / r           随机挑一道菜");
    println!("  search <关键词...>   按菜名或食材搜索（空格分隔，全部命中）");
    println!("  pick <序号>          查看搜索结果");
    println!("  explore <食材或菜名> AI 探索厨房");
    println!("  take <序号>          把 AI 推荐加入私房菜并查看");
    println!("  teach / t            让 AI 教你做当前选中的菜");
    println!("  retry                重试上一次 AI 请求");
    println!("  list / l             按分类浏览全部菜谱");
    println!("  add 菜名 | 食材 食材 | 分类");
    println!("  del <id> → confirm / cancel");
    println!("  key <API Key>        保存 DeepSeek API Key");
    println!("  quit / q             退出");
}
