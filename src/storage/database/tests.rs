//! Storage operation tests over an in-memory SQLite database

use crate::config::DatabaseConfig;
use crate::core::models::{Membership, Team, TeamScope, User, UserScope};
use crate::storage::Database;
use crate::storage::database::{
    MembershipParams, NewCowCensus, TeamParams, UpdateMembership, UpdateTeam, UserParams,
};
use crate::utils::codes::generate_code;
use uuid::Uuid;

async fn test_db() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        auto_migrate: true,
    };
    let db = Database::connect(&config).await.expect("connect");
    db.migrate().await.expect("migrate");
    db
}

fn make_user(role: UserScope) -> User {
    let mut user = User::new(
        format!("{}@test.example", Uuid::new_v4()),
        "Test Rancher".to_string(),
        "not-a-real-hash".to_string(),
    );
    user.role = role;
    user
}

fn make_team(name: &str) -> Team {
    let now = chrono::Utc::now();
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        acre_size: 320.0,
        address: "1 Pasture Rd".to_string(),
        yrs_ranch: 5,
        yrs_hol_mang: 2,
        code: generate_code(8),
        created_at: now,
        updated_at: now,
    }
}

fn make_membership(team: &Team, user: &User, role: TeamScope) -> Membership {
    let now = chrono::Utc::now();
    Membership {
        id: Uuid::new_v4(),
        team_id: team.id,
        user_id: user.id,
        role,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn user_round_trip_by_id_and_email() {
    let db = test_db().await;
    let user = make_user(UserScope::User);
    db.create_user(&user).await.unwrap();

    let by_id = db.find_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, user.email);
    assert_eq!(by_id.role, UserScope::User);

    let by_email = db.find_user_by_email(&user.email).await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(
        db.find_user_by_email("nobody@test.example")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn team_crud_cycle() {
    let db = test_db().await;
    let team = make_team("Cycle Ranch");
    db.create_team(&team).await.unwrap();

    let fetched = db
        .get_teams(TeamParams {
            id: Some(team.id),
            ..TeamParams::default()
        })
        .await
        .unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].name, "Cycle Ranch");

    let updated = db
        .edit_teams(
            UpdateTeam {
                name: Some("Renamed Ranch".to_string()),
                ..UpdateTeam::default()
            },
            TeamParams {
                id: Some(team.id),
                ..TeamParams::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].name, "Renamed Ranch");
    // Untouched fields survive a partial update
    assert_eq!(updated[0].code, team.code);

    let deleted = db
        .delete_teams(TeamParams {
            id: Some(team.id),
            ..TeamParams::default()
        })
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let gone = db
        .get_teams(TeamParams {
            id: Some(team.id),
            ..TeamParams::default()
        })
        .await
        .unwrap();
    assert!(gone.is_empty());
}

#[tokio::test]
async fn edit_with_no_match_returns_empty() {
    let db = test_db().await;
    let updated = db
        .edit_teams(
            UpdateTeam {
                name: Some("Ghost".to_string()),
                ..UpdateTeam::default()
            },
            TeamParams {
                id: Some(Uuid::new_v4()),
                ..TeamParams::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_empty());

    let deleted = db
        .delete_teams(TeamParams {
            id: Some(Uuid::new_v4()),
            ..TeamParams::default()
        })
        .await
        .unwrap();
    assert_eq!(deleted, 0);
}

#[tokio::test]
async fn memberships_filter_by_user_and_team() {
    let db = test_db().await;
    let user_a = make_user(UserScope::User);
    let user_b = make_user(UserScope::User);
    db.create_user(&user_a).await.unwrap();
    db.create_user(&user_b).await.unwrap();

    let team_a = make_team("Ranch A");
    let team_b = make_team("Ranch B");
    db.create_team(&team_a).await.unwrap();
    db.create_team(&team_b).await.unwrap();

    db.create_membership(&make_membership(&team_a, &user_a, TeamScope::Owner))
        .await
        .unwrap();
    db.create_membership(&make_membership(&team_b, &user_a, TeamScope::User))
        .await
        .unwrap();
    db.create_membership(&make_membership(&team_a, &user_b, TeamScope::Contributor))
        .await
        .unwrap();

    let for_user_a = db
        .get_memberships(MembershipParams {
            user_id: Some(user_a.id),
            ..MembershipParams::default()
        })
        .await
        .unwrap();
    assert_eq!(for_user_a.len(), 2);

    let for_team_a = db
        .get_memberships(MembershipParams {
            team_id: Some(team_a.id),
            ..MembershipParams::default()
        })
        .await
        .unwrap();
    assert_eq!(for_team_a.len(), 2);

    let owners = db
        .get_memberships(MembershipParams {
            team_id: Some(team_a.id),
            role: Some(TeamScope::Owner),
            ..MembershipParams::default()
        })
        .await
        .unwrap();
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].user_id, user_a.id);
}

#[tokio::test]
async fn membership_role_update_round_trips_the_scope() {
    let db = test_db().await;
    let user = make_user(UserScope::User);
    db.create_user(&user).await.unwrap();
    let team = make_team("Scope Ranch");
    db.create_team(&team).await.unwrap();

    let membership = make_membership(&team, &user, TeamScope::User);
    db.create_membership(&membership).await.unwrap();

    let updated = db
        .edit_memberships(
            UpdateMembership {
                role: Some(TeamScope::Owner),
            },
            MembershipParams {
                id: Some(membership.id),
                ..MembershipParams::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated[0].role, TeamScope::Owner);
}

#[tokio::test]
async fn teams_filter_by_member_user() {
    let db = test_db().await;
    let member = make_user(UserScope::User);
    let outsider = make_user(UserScope::User);
    db.create_user(&member).await.unwrap();
    db.create_user(&outsider).await.unwrap();

    let team = make_team("Joined Ranch");
    let other = make_team("Other Ranch");
    db.create_team(&team).await.unwrap();
    db.create_team(&other).await.unwrap();
    db.create_membership(&make_membership(&team, &member, TeamScope::User))
        .await
        .unwrap();

    let joined = db
        .get_teams(TeamParams {
            user_id: Some(member.id),
            ..TeamParams::default()
        })
        .await
        .unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, team.id);

    let none = db
        .get_teams(TeamParams {
            user_id: Some(outsider.id),
            ..TeamParams::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn cow_census_create_links_photo() {
    use crate::core::models::photo::PhotoInput;
    use crate::storage::database::PhotoParams;

    let db = test_db().await;
    let user = make_user(UserScope::User);
    db.create_user(&user).await.unwrap();
    let team = make_team("Census Ranch");
    db.create_team(&team).await.unwrap();

    let now = chrono::Utc::now();
    let herd = crate::core::models::Herd {
        id: Uuid::new_v4(),
        team_id: team.id,
        breed: "Angus".to_string(),
        count: 40,
        breeding_date: now,
        calving_date: now,
        created_at: now,
        updated_at: now,
    };
    db.create_herd(&herd).await.unwrap();

    let census = db
        .create_cow_census(
            NewCowCensus {
                herd_id: herd.id,
                bcs: 5.5,
                notes: "healthy".to_string(),
                tag: "A-17".to_string(),
            },
            Some(PhotoInput {
                full_url: "https://photos.test/full.jpg".to_string(),
                thumb_url: "https://photos.test/thumb.jpg".to_string(),
            }),
        )
        .await
        .unwrap();

    let photo_id = census.photo_id.expect("photo linked");
    let photos = db
        .get_photos(PhotoParams {
            id: Some(photo_id),
            ..PhotoParams::default()
        })
        .await
        .unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].census_id, Some(census.id));
}

#[tokio::test]
async fn verification_code_redeems_once_and_promotes() {
    let db = test_db().await;
    let user = make_user(UserScope::Unverified);
    db.create_user(&user).await.unwrap();

    let code = db.create_verification_code(&user.email, 300).await.unwrap();

    let verified = db
        .redeem_verification_code(&user.email, &code)
        .await
        .unwrap();
    assert_eq!(verified.role, UserScope::User);

    // Consumed on first redemption
    assert!(
        db.redeem_verification_code(&user.email, &code)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn expired_verification_code_is_rejected() {
    let db = test_db().await;
    let user = make_user(UserScope::Unverified);
    db.create_user(&user).await.unwrap();

    let code = db.create_verification_code(&user.email, 0).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    assert!(
        db.redeem_verification_code(&user.email, &code)
            .await
            .is_err()
    );

    // Still unverified
    let unchanged = db.find_user_by_email(&user.email).await.unwrap().unwrap();
    assert_eq!(unchanged.role, UserScope::Unverified);
}

#[tokio::test]
async fn wrong_verification_code_is_rejected() {
    let db = test_db().await;
    let user = make_user(UserScope::Unverified);
    db.create_user(&user).await.unwrap();

    db.create_verification_code(&user.email, 300).await.unwrap();
    assert!(
        db.redeem_verification_code(&user.email, "WRONG1")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn get_users_respects_limit_and_offset() {
    let db = test_db().await;
    for _ in 0..5 {
        db.create_user(&make_user(UserScope::User)).await.unwrap();
    }

    let page = db
        .get_users(UserParams {
            limit: Some(2),
            ..UserParams::default()
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 2);

    let rest = db
        .get_users(UserParams {
            offset: Some(4),
            limit: Some(10),
            ..UserParams::default()
        })
        .await
        .unwrap();
    assert_eq!(rest.len(), 1);
}
