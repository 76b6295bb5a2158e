//! Fixed sample dataset used to seed empty stores.

use chrono::Utc;

use arena_core::domain::{
    BlogCategory, BlogPost, Game, Match, MatchResult, MatchStatus, MatchTeam, NewsArticle,
    NewsCategory,
};

const MEDIA_TEAM: &str = "Arena Bulls Medya";

fn news(
    id: &str,
    title: &str,
    content: &str,
    excerpt: &str,
    category: NewsCategory,
    date: &str,
    slug: &str,
    featured: bool,
) -> NewsArticle {
    let now = Utc::now();
    NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        image: format!("/placeholder.svg?height=400&width=600&text={}", slug),
        category,
        date: date.to_string(),
        slug: slug.to_string(),
        featured,
        author: MEDIA_TEAM.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_news() -> Vec<NewsArticle> {
    vec![
        news(
            "news-future-festival",
            "Future Festival 2025 Duyurusu",
            "Arena Bulls olarak Future Festival 2025'te yer alacağız! Bu büyük etkinlikte \
             esports dünyasının en önemli isimleri bir araya gelecek. Takımımız bu prestijli \
             festivalde Türkiye'yi temsil edecek.",
            "Arena Bulls Future Festival 2025'te Türkiye'yi temsil edecek",
            NewsCategory::Etkinlik,
            "2024-01-20",
            "future-festival-2025-4412",
            true,
        ),
        news(
            "news-1",
            "Arena Bulls Yeni Sezona Hazır",
            "Arena Bulls esports takımı yeni sezon için hazırlıklarını tamamladı. Güçlü \
             kadromuzla birlikte bu sezon da başarılı olmaya devam edeceğiz.",
            "Takımımız yeni sezon için güçlü kadrosuyla hazır",
            NewsCategory::Haber,
            "2024-01-15",
            "arena-bulls-yeni-sezona-hazir",
            true,
        ),
        news(
            "news-2",
            "Yeni Transfer: Phantom Takıma Katıldı",
            "Valorant takımımıza yeni katılan Phantom ile birlikte kadromuz daha da güçlendi. \
             Phantom'ın deneyimi ile takımımızın başarısına katkı sağlayacağına inanıyoruz.",
            "Valorant takımımıza yeni oyuncu Phantom katıldı",
            NewsCategory::Transfer,
            "2024-01-12",
            "yeni-transfer-phantom-takima-katildi",
            false,
        ),
        news(
            "news-3",
            "Razer ile Sponsorluk Anlaşması İmzalandı",
            "Arena Bulls olarak Razer ile önemli bir sponsorluk anlaşması imzaladık. Bu anlaşma \
             ile oyuncularımız en son teknoloji gaming ekipmanları kullanacak.",
            "Razer ile stratejik sponsorluk ortaklığı başladı",
            NewsCategory::Sponsorluk,
            "2024-01-10",
            "razer-ile-sponsorluk-anlasmasi",
            true,
        ),
        news(
            "news-4",
            "Yeni Antrenman Merkezi Açılıyor",
            "Arena Bulls'un yeni antrenman merkezi İstanbul'da açılıyor. 500 metrekarelik modern \
             tesisimizde oyuncularımız en iyi koşullarda antrenman yapabilecekler.",
            "İstanbul'da modern antrenman merkezi açılıyor",
            NewsCategory::Duyuru,
            "2024-01-03",
            "yeni-antrenman-merkezi-aciliyor",
            false,
        ),
    ]
}

fn blog(
    id: &str,
    title: &str,
    content: &str,
    excerpt: &str,
    category: BlogCategory,
    date: &str,
    slug: &str,
    featured: bool,
    author: &str,
    read_time: u32,
    tags: &[&str],
) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        image: format!("/placeholder.svg?height=400&width=600&text={}", slug),
        category,
        date: date.to_string(),
        slug: slug.to_string(),
        featured,
        author: author.to_string(),
        read_time,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_blog_posts() -> Vec<BlogPost> {
    vec![
        blog(
            "blog-1",
            "2024 Esports Meta Analizi: Valorant",
            "2024 yılında Valorant meta'sında yaşanan değişiklikleri analiz ediyoruz. Agent \
             seçimleri, map stratejileri ve takım kompozisyonlarındaki yenilikler detaylı \
             olarak inceleniyor.",
            "Valorant 2024 meta değişiklikleri ve strateji analizleri",
            BlogCategory::Analiz,
            "2024-01-14",
            "2024-esports-meta-analizi-valorant",
            true,
            "Arena Bulls Analiz Ekibi",
            12,
            &["valorant", "meta", "analiz", "strateji"],
        ),
        blog(
            "blog-2",
            "Oyuncu Röportajı: Furiouss ile Özel Söyleşi",
            "Takımımızın yıldız oyuncusu Furiouss ile esports kariyeri, başarı hikayeleri ve \
             gelecek hedefleri hakkında özel bir röportaj gerçekleştirdik.",
            "Furiouss ile esports kariyeri ve başarı hikayeleri",
            BlogCategory::Roportaj,
            "2024-01-11",
            "oyuncu-roportaji-furiouss-ozel-soylesi",
            true,
            MEDIA_TEAM,
            8,
            &["röportaj", "furiouss", "lol", "oyuncu"],
        ),
        blog(
            "blog-3",
            "Counter-Strike 2: Yeni Başlayanlar İçin Rehber",
            "Counter-Strike 2'ye yeni başlayanlar için kapsamlı rehber. Temel mekanikler, silah \
             seçimleri, map bilgisi ve takım oyunu stratejileri.",
            "CS2'ye yeni başlayanlar için kapsamlı başlangıç rehberi",
            BlogCategory::Rehber,
            "2024-01-09",
            "counter-strike-2-yeni-baslayanlar-rehber",
            false,
            "Arena Bulls Eğitim Ekibi",
            15,
            &["cs2", "rehber", "başlangıç", "strateji"],
        ),
        blog(
            "blog-4",
            "Esports Teknolojisinin Geleceği",
            "Esports dünyasında teknolojinin rolü ve gelecekteki gelişmeler. VR esports, AI \
             destekli antrenman sistemleri ve cloud gaming'in yarışmalardaki yeri inceleniyor.",
            "Esports teknolojisindeki yenilikler ve gelecek trendleri",
            BlogCategory::Teknoloji,
            "2024-01-07",
            "esports-teknolojisinin-gelecegi",
            true,
            "Arena Bulls Teknoloji Ekibi",
            10,
            &["teknoloji", "gelecek", "vr", "ai"],
        ),
    ]
}

fn team(name: &str, logo: &str, score: Option<i32>) -> MatchTeam {
    MatchTeam {
        name: name.to_string(),
        logo: logo.to_string(),
        score,
    }
}

pub fn sample_matches() -> Vec<Match> {
    let now = Utc::now();
    let bulls = |score| team("Arena Bulls", "/images/logo.png", score);
    vec![
        Match {
            id: "match-1".to_string(),
            game: Game::Valorant,
            tournament: "VCT 2025 - Türkiye Ligi".to_string(),
            date: "2025-05-21".to_string(),
            time: "19:00".to_string(),
            team_a: bulls(Some(13)),
            team_b: team("Phoenix Fury", "/images/teams/phoenix-fury.png", Some(7)),
            status: MatchStatus::Completed,
            result: Some(MatchResult::Win),
            created_at: now,
            updated_at: now,
        },
        Match {
            id: "match-2".to_string(),
            game: Game::LeagueOfLegends,
            tournament: "TCL 2025 Yaz Mevsimi".to_string(),
            date: "2025-05-25".to_string(),
            time: "17:00".to_string(),
            team_a: bulls(None),
            team_b: team("Blue Wolves", "/images/teams/blue-wolves.png", None),
            status: MatchStatus::Upcoming,
            result: None,
            created_at: now,
            updated_at: now,
        },
        Match {
            id: "match-3".to_string(),
            game: Game::Fc25,
            tournament: "FIFA eWorld Cup Elemeleri".to_string(),
            date: "2025-05-18".to_string(),
            time: "20:00".to_string(),
            team_a: bulls(Some(2)),
            team_b: team("Red Bulls", "/images/teams/red-bulls.png", Some(1)),
            status: MatchStatus::Completed,
            result: Some(MatchResult::Win),
            created_at: now,
            updated_at: now,
        },
        Match {
            id: "match-4".to_string(),
            game: Game::CounterStrike2,
            tournament: "ESL Pro League 2025".to_string(),
            date: "2025-05-27".to_string(),
            time: "21:00".to_string(),
            team_a: bulls(None),
            team_b: team("Ninjas in Pyjamas", "/images/teams/ninja.png", None),
            status: MatchStatus::Upcoming,
            result: None,
            created_at: now,
            updated_at: now,
        },
    ]
}
