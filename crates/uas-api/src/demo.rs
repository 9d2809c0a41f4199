//! Demo dataset seeded by `POST /api/v1/reset/user?demo=true`.
//!
//! Three tenants with three users each, in a fixed order. The digests
//! were provisioned by the operations tooling at 29 000 PBKDF2 rounds;
//! the plaintexts are not recorded here.

use uas_model::User;
use uuid::{uuid, Uuid};

/// Tenants covered by the demo dataset, in seeding order.
pub const DEMO_CLIENT_IDS: [Uuid; 3] = [
    // Universo Móvel
    uuid!("acfa53b4-58f3-46e8-809b-19ef52b437ed"),
    // GlobalCom
    uuid!("22128c04-0c2c-4633-8317-0fffd552f7a6"),
    // Gigatel
    uuid!("9a652818-342e-4771-84cf-39c20a29264d"),
];

/// Returns the demo users in seeding order.
#[must_use]
pub fn demo_users() -> Vec<User> {
    vec![
        User::with_id(
            uuid!("46f94cd1-8494-4e96-b308-80d7705868be"),
            DEMO_CLIENT_IDS[0],
            "Rafael Almeida",
            "r.almeida@example.org",
            "$pbkdf2-sha256$i=29000,l=32$1lpLSWmtlTKm1JpTihFCaA$eS5gFesJgpzCJZsKlxmWwqlSEDwuXFLFTHwe41a0YAI",
        ),
        User::with_id(
            uuid!("32c60b97-e136-4e27-9488-6f996e466909"),
            DEMO_CLIENT_IDS[0],
            "Beatriz Souza",
            "beatriz.s@example.org",
            "$pbkdf2-sha256$i=29000,l=32$+b93TumdE8KYs1ZK6f3fmw$UgzJRrCh3amQKccm9GXiTUo/zNaWk/b6gLzMoTheYzI",
        ),
        User::with_id(
            uuid!("c1a1fb0f-e9d0-47ba-b731-539cf65e1db0"),
            DEMO_CLIENT_IDS[0],
            "Lucas Henrique Santos",
            "lucas.hs@example.org",
            "$pbkdf2-sha256$i=29000,l=32$MCbEWEvpPWdMCcHY+x9jzA$jNVk1HcpKEjNLcxWmctuNH/7f1F6L4J85XmE5DoLy3U",
        ),
        User::with_id(
            uuid!("08c3ce3a-cd26-4c38-a6b2-d4cce508489f"),
            DEMO_CLIENT_IDS[1],
            "Santiago Fernández",
            "santiago@example.net",
            "$pbkdf2-sha256$i=29000,l=32$LEWIMYbQurcWojTG2HtPaQ$0t3OnIw8VTwU8FBQK8dql7SzP8uB5/YWRHeHqt29TmA",
        ),
        User::with_id(
            uuid!("f88f7ac7-c15f-4ff2-8ae8-7375b7b2f8db"),
            DEMO_CLIENT_IDS[1],
            "Valentina López",
            "valentina@example.net",
            "$pbkdf2-sha256$i=29000,l=32$e+99z7nXutfaew/h/D/nHA$9yT9d4Wig+OwcUWsGA6qwNo+zW4lCYoAwJ9Xq3g4ajQ",
        ),
        User::with_id(
            uuid!("26508d6b-d2ef-45da-a8e6-de44b3166266"),
            DEMO_CLIENT_IDS[1],
            "Mateo González",
            "mateo@example.net",
            "$pbkdf2-sha256$i=29000,l=32$3htjbM055xxjrDWm9J6TMg$8grxvR8F7d0XK8t+/x4UyE203Tpr+DHHIKttQHvlpG0",
        ),
        User::with_id(
            uuid!("e7bcf651-c7d7-4dfa-9633-14598673faff"),
            DEMO_CLIENT_IDS[2],
            "Juan Carlos Rodríguez",
            "juan.rodriguez@example.com",
            "$pbkdf2-sha256$i=29000,l=32$H8MYQ0ipFcJY653TGmNsTQ$alhrArnPC45bFk/A4MgUlJguVQaOEDD847ko+Za7Mpw",
        ),
        User::with_id(
            uuid!("b713f559-cae5-4db3-992a-d3553fb25000"),
            DEMO_CLIENT_IDS[2],
            "María Fernanda Gómez",
            "maria.gomez@example.com",
            "$pbkdf2-sha256$i=29000,l=32$iTEmxJizVkqp9V4rBQBgbA$VUy6t1+Kueb0Abk52OlmIoK+DjiferKUl0nkS1cbEn0",
        ),
        User::with_id(
            uuid!("53dc1ea3-02a1-4766-bc7c-e30f9eb590f1"),
            DEMO_CLIENT_IDS[2],
            "Andrés Felipe Martínez",
            "andres.martinez@example.com",
            "$pbkdf2-sha256$i=29000,l=32$REgppXQOIYTQem8NQehdaw$4+MzQ6Jd/9Fr6O5dpsgwPjolqsJg5AdrxUUlmz050MI",
        ),
    ]
}
