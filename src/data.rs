use crate::recipe::Recipe;

/// The fixed built-in catalog. Loaded once at startup, never mutated.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        // 牛肉类
        Recipe::builtin("b1", "日式牛排盖饭", &["Ribeye牛排", "米饭", "大蒜", "黄油"], "牛肉类"),
        Recipe::builtin("b2", "青椒炒牛肉", &["牛肉", "青椒"], "牛肉类"),
        Recipe::builtin("b3", "孜然洋葱炒牛肉", &["牛肉", "洋葱", "孜然"], "牛肉类"),
        Recipe::builtin("b4", "黑椒玉米牛肉粒", &["牛肉", "玉米", "黑胡椒"], "牛肉类"),
        Recipe::builtin("b5", "西红柿土豆炖牛肉", &["牛肉", "西红柿", "土豆"], "牛肉类"),
        Recipe::builtin("b6", "小炒黄牛肉", &["牛肉", "小米辣", "香菜"], "牛肉类"),
        Recipe::builtin("b7", "黑椒牛柳炒意面", &["Flank牛肉", "意面", "黑胡椒", "红椒"], "牛肉类"),
        Recipe::builtin("b8", "红烧牛肉面", &["牛腩", "面条", "豆瓣酱", "八角"], "牛肉类"),
        // 猪肉/排骨类
        Recipe::builtin("p1", "蒜香排骨[免油炸]", &["排骨", "大蒜"], "猪肉/排骨类"),
        Recipe::builtin("p2", "炖排骨", &["排骨", "葱姜"], "猪肉/排骨类"),
        Recipe::builtin("p3", "农家小炒肉", &["五花肉", "青红椒"], "猪肉/排骨类"),
        Recipe::builtin("p4", "土豆炒肉", &["土豆", "猪肉"], "猪肉/排骨类"),
        Recipe::builtin("p5", "糖醋里脊", &["猪里脊", "番茄酱", "白醋"], "猪肉/排骨类"),
        Recipe::builtin("p6", "鱼香肉丝", &["里脊肉", "木耳", "胡萝卜", "青椒"], "猪肉/排骨类"),
        // 鸡肉类
        Recipe::builtin("c1", "柠檬炒鸡肉", &["鸡肉", "柠檬"], "鸡肉类"),
        Recipe::builtin("c2", "凉拌手撕鸡", &["鸡腿", "辣椒油", "花生"], "鸡肉类"),
        Recipe::builtin("c3", "鸡公煲", &["鸡肉", "洋葱", "芹菜"], "鸡肉类"),
        Recipe::builtin("c4", "宫保鸡丁", &["鸡胸肉", "花生米", "干辣椒"], "鸡肉类"),
        Recipe::builtin("c5", "照烧鸡腿饭", &["鸡腿", "米饭", "照烧汁"], "鸡肉类"),
        // 素菜/蛋/主食
        Recipe::builtin("v1", "醋溜白菜", &["白菜", "醋", "干辣椒"], "素菜/蛋/主食"),
        Recipe::builtin("v2", "芹菜炒玉米粒", &["芹菜", "玉米"], "素菜/蛋/主食"),
        Recipe::builtin("v3", "西葫芦炒蛋", &["西葫芦", "鸡蛋"], "素菜/蛋/主食"),
        Recipe::builtin("v4", "西红柿炒鸡蛋", &["西红柿", "鸡蛋"], "素菜/蛋/主食"),
        Recipe::builtin("v5", "干煸菜花", &["菜花", "干辣椒"], "素菜/蛋/主食"),
        Recipe::builtin("v6", "蟹柳滑蛋薯饼汉堡", &["蟹柳", "鸡蛋", "薯饼"], "素菜/蛋/主食"),
        Recipe::builtin("v7", "黄油煎蛋早餐", &["鸡蛋", "黄油"], "素菜/蛋/主食"),
        Recipe::builtin("v8", "麻婆豆腐", &["嫩豆腐", "肉末", "豆瓣酱"], "素菜/蛋/主食"),
        Recipe::builtin("v9", "地三鲜", &["土豆", "茄子", "青椒"], "素菜/蛋/主食"),
    ]
}
