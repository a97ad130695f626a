//! End-to-end page flows against the in-process portfolio API.

use serde_json::json;

use crate::modules::contact::application::ContactStatusDraft;
use crate::modules::project::application::ProjectDraft;
use crate::modules::site::application::{DraftPayload, SectionName, SessionTarget, UiState};
use crate::modules::skill::application::domain::entities::SkillCategory;
use crate::modules::skill::application::SkillDraft;
use crate::shared::http::AUTH_TOKEN_KEY;
use crate::shared::section::SectionError;
use crate::shared::storage::LocalStore;
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::fake_backend::{FakeBackend, ADMIN_PASSWORD, ISSUED_TOKEN};

fn go_skill() -> SkillDraft {
    SkillDraft {
        name: "Go".to_string(),
        proficiency: 80,
        category: SkillCategory::ProgrammingLanguages,
        icon: String::new(),
    }
}

#[actix_web::test]
async fn created_skill_leads_its_group() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "skills",
        json!({
            "name": "Python",
            "proficiency": 70,
            "category": "Programming Languages",
            "createdAt": "2024-01-01T00:00:00Z"
        }),
    );
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;
    page.load_all().await;

    page.open(SessionTarget::Skills { id: None }).await.unwrap();
    page.edit_draft(DraftPayload::Skills(go_skill())).await.unwrap();
    let note = page.submit(SectionName::Skills).await.unwrap();

    assert_eq!(note.description, "Skill created successfully");

    let stored = backend.records("skills");
    assert!(stored
        .iter()
        .any(|s| s["name"] == "Go" && s["proficiency"] == 80 && s["category"] == "Programming Languages"));

    let view = page.view(&UiState::default()).await;
    let group = view
        .skills
        .iter()
        .find(|g| g.category == SkillCategory::ProgrammingLanguages)
        .unwrap();
    let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Go", "Python"]);
}

#[actix_web::test]
async fn empty_required_field_never_reaches_the_api() {
    let backend = FakeBackend::start().await;
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;

    page.open(SessionTarget::Projects { id: None }).await.unwrap();
    page.edit_draft(DraftPayload::Projects(ProjectDraft {
        title: "Portfolio".to_string(),
        ..Default::default()
    }))
    .await
    .unwrap();

    let err = page.submit(SectionName::Projects).await.unwrap_err();

    assert!(matches!(err, SectionError::Validation(_)));
    assert_eq!(err.to_string(), "Please fill in all required fields");
    assert!(backend.writes().is_empty());
    assert!(page.projects.snapshot().await.session.is_open());
}

#[actix_web::test]
async fn updated_project_keeps_unpatched_fields() {
    let backend = FakeBackend::start().await;
    let seeded = backend.seed(
        "projects",
        json!({
            "title": "Portfolio",
            "description": "Personal site",
            "technologies": ["React", "Node"],
            "image": "https://img.example/p.png",
            "github": "https://github.com/me/portfolio",
            "category": "Projects",
            "createdAt": "2025-01-01T00:00:00Z"
        }),
    );
    let id = seeded["_id"].as_str().unwrap().to_string();
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;
    page.projects.load().await;

    page.open(SessionTarget::Projects { id: Some(id.clone()) })
        .await
        .unwrap();
    let mut draft = page
        .projects
        .snapshot()
        .await
        .session
        .draft()
        .cloned()
        .unwrap();
    assert_eq!(draft.technologies, vec!["React", "Node"]);
    assert_eq!(draft.github, "https://github.com/me/portfolio");

    draft.title = "Portfolio v2".to_string();
    page.edit_draft(DraftPayload::Projects(draft)).await.unwrap();
    let note = page.submit(SectionName::Projects).await.unwrap();
    assert_eq!(note.description, "Project updated successfully");

    let project = page
        .projects
        .data()
        .await
        .into_iter()
        .find(|p| p.id == id)
        .unwrap();
    assert_eq!(project.title, "Portfolio v2");
    assert_eq!(project.description, "Personal site");
    assert_eq!(project.technologies, vec!["React", "Node"]);
    assert_eq!(project.category.as_deref(), Some("Projects"));
}

#[actix_web::test]
async fn deleted_skill_disappears() {
    let backend = FakeBackend::start().await;
    let seeded = backend.seed(
        "skills",
        json!({"name": "Rust", "proficiency": 60, "category": "Backend"}),
    );
    let id = seeded["_id"].as_str().unwrap().to_string();
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;
    page.skills.load().await;

    page.open(SessionTarget::Skills { id: Some(id.clone()) })
        .await
        .unwrap();
    let note = page.delete(SectionName::Skills).await.unwrap();

    assert_eq!(note.description, "Skill deleted successfully");
    assert!(page.skills.data().await.iter().all(|s| s.id != id));
    assert!(backend.records("skills").is_empty());
}

#[actix_web::test]
async fn wrong_password_stores_nothing() {
    let backend = FakeBackend::start().await;
    let (state, store) = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .build_with_store();

    assert!(state.page.login("not-it").await.is_err());

    assert!(!state.page.context().is_edit_mode());
    assert!(store.get(AUTH_TOKEN_KEY).is_none());
}

#[actix_web::test]
async fn login_survives_reload() {
    let backend = FakeBackend::start().await;
    let (state, store) = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .build_with_store();

    let note = state.page.login(ADMIN_PASSWORD).await.unwrap();
    assert_eq!(note.title, "Access Granted");
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some(ISSUED_TOKEN));

    let reloaded = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_store(store)
        .build();
    assert!(reloaded.page.context().is_edit_mode());
    assert!(reloaded.page.verify().await.unwrap());
}

#[actix_web::test]
async fn category_rename_leaves_project_records_alone() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "projects",
        json!({
            "title": "Portfolio",
            "description": "Personal site",
            "technologies": ["React"],
            "image": "https://img.example/p.png",
            "category": "Projects"
        }),
    );
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;
    page.projects.load().await;
    assert_eq!(page.view(&UiState::default()).await.projects.tabs[0].projects.len(), 1);

    page.context()
        .update_categories(|c| c.rename(0, "Featured"))
        .unwrap();

    let view = page.view(&UiState::default()).await;
    assert_eq!(view.projects.tabs[0].category, "Featured");
    assert!(view.projects.tabs[0].projects.is_empty());
    assert_eq!(view.projects.active, "Featured");
    assert_eq!(backend.records("projects")[0]["category"], "Projects");
    assert!(backend.writes().is_empty());
}

#[actix_web::test]
async fn owner_marks_message_as_read() {
    let backend = FakeBackend::start().await;
    let seeded = backend.seed(
        "contacts",
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello"
        }),
    );
    let id = seeded["_id"].as_str().unwrap().to_string();
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;
    page.load_all().await;
    assert_eq!(page.view(&UiState::default()).await.inbox[0].status, "new");

    page.open(SessionTarget::Contacts { id }).await.unwrap();
    page.edit_draft(DraftPayload::Contacts(ContactStatusDraft {
        status: "read".to_string(),
    }))
    .await
    .unwrap();
    let note = page.submit(SectionName::Contacts).await.unwrap();

    assert_eq!(note.description, "Message updated successfully");
    assert_eq!(backend.records("contacts")[0]["status"], "read");
    assert_eq!(page.view(&UiState::default()).await.inbox[0].status, "read");
}

#[actix_web::test]
async fn logout_hides_inbox_and_closes_modals() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "contacts",
        json!({"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello"}),
    );
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .with_local_entry(AUTH_TOKEN_KEY, ISSUED_TOKEN)
        .build();
    let page = &state.page;
    page.load_all().await;
    page.open(SessionTarget::About).await.unwrap();

    page.logout().await;

    let view = page.view(&UiState::default()).await;
    assert!(!view.edit_mode);
    assert!(view.inbox.is_empty());
    assert!(view.sessions.open_sections().is_empty());
}

#[actix_web::test]
async fn persisted_planner_survives_reload() {
    let (state, store) = TestAppStateBuilder::default()
        .with_persisted_documents()
        .build_with_store();
    state.page.learning_planner.load().await;

    let phase = state.page.toggle_phase("2", "2-2").await.unwrap();
    assert!(phase.completed);

    let reloaded = TestAppStateBuilder::default()
        .with_persisted_documents()
        .with_store(store)
        .build();
    reloaded.page.learning_planner.load().await;

    let topics = reloaded.page.learning_planner.data().await;
    assert_eq!(topics[1].completed_phases(), 2);
}

#[actix_web::test]
async fn ephemeral_planner_forgets_on_reload() {
    let (state, store) = TestAppStateBuilder::default().build_with_store();
    state.page.learning_planner.load().await;
    state.page.toggle_phase("2", "2-2").await.unwrap();

    let reloaded = TestAppStateBuilder::default().with_store(store).build();
    reloaded.page.learning_planner.load().await;

    assert_eq!(reloaded.page.learning_planner.data().await[1].completed_phases(), 1);
}

#[actix_web::test]
async fn failed_section_fetch_only_empties_that_section() {
    let backend = FakeBackend::start().await;
    backend.seed(
        "skills",
        json!({"name": "Rust", "proficiency": 60, "category": "Backend"}),
    );
    backend.seed_singleton("portfolio", json!({"resumeLink": "https://cv.example/me.pdf"}));
    let state = TestAppStateBuilder::default()
        .with_api(backend.base_url())
        .build();
    let page = &state.page;

    page.load_all().await;

    let view = page.view(&UiState::default()).await;
    assert_eq!(view.hero.resume_link, "https://cv.example/me.pdf");
    assert_eq!(view.skills[1].skills.len(), 1);
    assert!(page.inbox.snapshot().await.data.is_empty());
    assert!(view.loading.is_empty());
    assert!(backend.singleton("about").is_none());
}
