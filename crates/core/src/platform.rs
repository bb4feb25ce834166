use crate::Platform;

pub const XIAOHONGSHU: &str = "xiaohongshu";
pub const DOUYIN: &str = "douyin";
pub const BILIBILI: &str = "bilibili";

pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";
pub const FALLBACK_SEARCH_URL_TEMPLATE: &str = "https://www.google.com/search?q={keyword}";

struct BuiltinPlatform {
    id: &'static str,
    name: &'static str,
    package_name: &'static str,
    search_url_template: &'static str,
}

const BUILTIN_PLATFORMS: [BuiltinPlatform; 3] = [
    BuiltinPlatform {
        id: XIAOHONGSHU,
        name: "小红书",
        package_name: "com.xingin.xhs",
        search_url_template: "https://www.xiaohongshu.com/search_result?keyword={keyword}",
    },
    BuiltinPlatform {
        id: DOUYIN,
        name: "抖音",
        package_name: "com.ss.android.ugc.aweme",
        search_url_template: "https://www.douyin.com/search/{keyword}",
    },
    BuiltinPlatform {
        id: BILIBILI,
        name: "B站",
        package_name: "tv.danmaku.bili",
        search_url_template: "https://search.bilibili.com/all?keyword={keyword}",
    },
];

impl BuiltinPlatform {
    fn to_platform(&self) -> Platform {
        Platform {
            id: self.id.to_string(),
            name: self.name.to_string(),
            package_name: self.package_name.to_string(),
            icon: 0,
            is_enabled: true,
            search_url_template: self.search_url_template.to_string(),
        }
    }
}

/// The fixed platform set, always in the same order.
pub fn builtin_platforms() -> Vec<Platform> {
    BUILTIN_PLATFORMS
        .iter()
        .map(BuiltinPlatform::to_platform)
        .collect()
}

pub fn builtin_platform(id: &str) -> Option<Platform> {
    BUILTIN_PLATFORMS
        .iter()
        .find(|platform| platform.id == id)
        .map(BuiltinPlatform::to_platform)
}

pub(crate) fn builtin_package_table() -> impl Iterator<Item = (&'static str, &'static str)> {
    BUILTIN_PLATFORMS
        .iter()
        .map(|platform| (platform.id, platform.package_name))
}

/// Built-ins first, then stored rows as given. Ids are not de-duplicated.
pub fn merge_platforms(stored: Vec<Platform>) -> Vec<Platform> {
    let mut platforms = builtin_platforms();
    platforms.extend(stored);
    platforms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_keep_fixed_order() {
        let ids: Vec<String> = builtin_platforms().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["xiaohongshu", "douyin", "bilibili"]);
    }

    #[test]
    fn merge_keeps_colliding_ids() {
        let mut custom = builtin_platform(DOUYIN).expect("douyin");
        custom.name = "Douyin (custom)".to_string();
        let merged = merge_platforms(vec![custom]);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.iter().filter(|p| p.id == DOUYIN).count(), 2);
        assert_eq!(merged[3].name, "Douyin (custom)");
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(builtin_platform("weibo").is_none());
    }
}
