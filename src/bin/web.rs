//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, NaiveDate, Utc};
use golf_tournament_web::{
    assign_groups, derive_groups, groups_to_csv, groups_to_html, import_roster, move_participant,
    CheckInStatus, Gender, GroupingPolicy, MoveTarget, Participant, Tournament, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    date: NaiveDate,
}

#[derive(serde::Serialize)]
struct TournamentSummary {
    id: TournamentId,
    name: String,
    date: NaiveDate,
    participant_count: usize,
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
    #[serde(default)]
    handicap: Option<f64>,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    member_number: Option<String>,
    #[serde(default)]
    pre_group_code: Option<String>,
}

#[derive(Deserialize)]
struct CheckInBody {
    status: CheckInStatus,
    #[serde(default)]
    check_in_time: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct NotesBody {
    notes: Option<String>,
}

#[derive(Deserialize)]
struct MoveBody {
    target: MoveTarget,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and participant id.
#[derive(Deserialize)]
struct TournamentParticipantPath {
    id: TournamentId,
    participant_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "golf-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = Tournament::new(body.name.trim(), body.date);
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    match g.get(&id) {
        Some(entry) => HttpResponse::Ok().json(&entry.tournament),
        None => HttpResponse::InternalServerError().body("state error"),
    }
}

/// List tournaments (id, name, date, roster size).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut summaries: Vec<TournamentSummary> = g
        .values()
        .map(|entry| TournamentSummary {
            id: entry.tournament.id,
            name: entry.tournament.name.clone(),
            date: entry.tournament.date,
            participant_count: entry.tournament.participants.len(),
        })
        .collect();
    summaries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    HttpResponse::Ok().json(summaries)
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Delete a tournament and its roster.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Register a single participant.
#[post("/api/tournaments/{id}/participants")]
async fn api_add_participant(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddParticipantBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let id = match t.register(&body.name) {
        Ok(id) => id,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    if let Some(p) = t.get_participant_mut(id) {
        p.handicap = body.handicap;
        p.gender = body.gender.unwrap_or_default();
        p.member_number = body.member_number.clone().unwrap_or_default();
        p.pre_group_code = body
            .pre_group_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);
    }
    HttpResponse::Ok().json(t)
}

/// Import a roster from CSV text. Replaces the existing roster.
#[post("/api/tournaments/{id}/participants/import")]
async fn api_import_roster(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    let participants = match import_roster(&body) {
        Ok(ps) => ps,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    log::info!(
        "Imported {} participants into tournament {}",
        participants.len(),
        path.id
    );
    entry.tournament.replace_roster(participants);
    HttpResponse::Ok().json(&entry.tournament)
}

/// Remove a participant by id. Checked-in participants cannot be removed.
#[delete("/api/tournaments/{id}/participants/{participant_id}")]
async fn api_remove_participant(
    state: AppState,
    path: Path<TournamentParticipantPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.remove_participant(path.participant_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update a participant's check-in status.
#[put("/api/tournaments/{id}/participants/{participant_id}/check-in")]
async fn api_check_in(
    state: AppState,
    path: Path<TournamentParticipantPath>,
    body: Json<CheckInBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.set_check_in(path.participant_id, body.status, body.check_in_time) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update a participant's notes.
#[put("/api/tournaments/{id}/participants/{participant_id}/notes")]
async fn api_set_notes(
    state: AppState,
    path: Path<TournamentParticipantPath>,
    body: Json<NotesBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match t.set_notes(path.participant_id, body.notes.clone()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Next free registration number (A01, A02, ...).
#[get("/api/tournaments/{id}/next-registration-number")]
async fn api_next_registration_number(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            let next = entry.tournament.next_registration_number();
            HttpResponse::Ok().json(serde_json::json!({ "next_number": next }))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Run auto-grouping over the roster. The stored roster is only replaced when
/// grouping succeeds (all-or-nothing); the engine works on a snapshot.
#[post("/api/tournaments/{id}/auto-group")]
async fn api_auto_group(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<GroupingPolicy>>,
) -> HttpResponse {
    let policy = body.map(|b| *b).unwrap_or_default();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let mut snapshot = t.participants.clone();
    match assign_groups(&mut snapshot, &policy) {
        Ok(groups) => {
            let total_groups = groups.len();
            log::info!(
                "Auto-grouped tournament {}: {} participants into {} groups",
                t.id,
                snapshot.len(),
                total_groups
            );
            t.participants = snapshot;
            HttpResponse::Ok().json(serde_json::json!({
                "groups": groups,
                "total_groups": total_groups,
                "total_participants": t.participants.len(),
            }))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Move one participant into an existing or new group. An undersized source
/// group comes back as a non-fatal warning.
#[post("/api/tournaments/{id}/participants/{participant_id}/move")]
async fn api_move_participant(
    state: AppState,
    path: Path<TournamentParticipantPath>,
    body: Json<MoveBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let mut snapshot = t.participants.clone();
    match move_participant(&mut snapshot, path.participant_id, &body.target) {
        Ok(outcome) => {
            if let Some(w) = &outcome.warning {
                log::info!("Move in tournament {}: {}", t.id, w);
            }
            t.participants = snapshot;
            HttpResponse::Ok().json(outcome)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Current groups with member details, derived from the roster.
#[get("/api/tournaments/{id}/groups")]
async fn api_get_groups(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &entry.tournament;
    let groups = derive_groups(&t.participants);
    let views: Vec<serde_json::Value> = groups
        .iter()
        .map(|group| {
            let members: Vec<&Participant> = group
                .members
                .iter()
                .filter_map(|id| t.participants.iter().find(|p| p.id == *id))
                .collect();
            serde_json::json!({ "code": group.code, "members": members })
        })
        .collect();
    HttpResponse::Ok().json(views)
}

/// Export group assignments as CSV.
#[get("/api/tournaments/{id}/groups/export.csv")]
async fn api_export_groups_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    let t = &entry.tournament;
    let groups = derive_groups(&t.participants);
    match groups_to_csv(&t.participants, &groups) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Export group assignments as a printable HTML sheet.
#[get("/api/tournaments/{id}/groups/export.html")]
async fn api_export_groups_html(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    let t = &entry.tournament;
    let groups = derive_groups(&t.participants);
    let html = groups_to_html(&t.name, &t.participants, &groups);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_add_participant)
            .service(api_import_roster)
            .service(api_remove_participant)
            .service(api_check_in)
            .service(api_set_notes)
            .service(api_next_registration_number)
            .service(api_auto_group)
            .service(api_move_participant)
            .service(api_get_groups)
            .service(api_export_groups_csv)
            .service(api_export_groups_html)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
