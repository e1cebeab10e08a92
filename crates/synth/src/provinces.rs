//! Fixed province roster with per-province county quotas.

/// Province name and number of example counties to generate for it.
pub const PROVINCE_ROSTER: &[(&str, u32)] = &[
    ("云南省", 73),
    ("贵州省", 66),
    ("四川省", 45),
    ("甘肃省", 58),
    ("陕西省", 50),
    ("河北省", 45),
    ("山西省", 36),
    ("内蒙古自治区", 31),
    ("辽宁省", 15),
    ("吉林省", 8),
    ("黑龙江省", 14),
    ("安徽省", 20),
    ("江西省", 24),
    ("河南省", 38),
    ("湖北省", 28),
    ("湖南省", 40),
    ("广西壮族自治区", 54),
    ("海南省", 5),
    ("重庆市", 14),
    ("青海省", 42),
    ("宁夏回族自治区", 8),
    ("新疆维吾尔自治区", 35),
    ("西藏自治区", 74),
];

/// Provinces whose counties draw from the lower (mountainous) base ranges.
const MOUNTAIN_PROVINCES: &[&str] = &[
    "云南省",
    "贵州省",
    "四川省",
    "甘肃省",
    "陕西省",
    "青海省",
    "宁夏回族自治区",
    "新疆维吾尔自治区",
    "西藏自治区",
];

/// Whether a province draws from the mountainous base ranges.
pub fn is_mountain(province_name: &str) -> bool {
    MOUNTAIN_PROVINCES.contains(&province_name)
}
