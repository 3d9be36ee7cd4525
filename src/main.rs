//
// Copyright (c) 2024 Nathan Fiedler
//
use actix_web::{
    delete, get, http::StatusCode, middleware, post, put, rt, web, App, HttpResponse, HttpServer,
};
use log::{error, info};
use rustls::{Certificate, PrivateKey, ServerConfig};
use rustls_pemfile::{certs, pkcs8_private_keys};
use serde_json::json;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use user_registry::data::repositories::EntityRepositoryImpl;
use user_registry::data::sources::{
    build_data_source, DataSourceType, RandomUserApi, RandomUserSource,
};
use user_registry::domain::entities::{UserDraft, UserFields};
use user_registry::domain::repositories::EntityRepository;
use user_registry::domain::usecases::{self, NoParams, UseCase};
use user_registry::{validate_identifier, validate_new_user, validate_user_patch, Error};
use uuid::Uuid;

struct AppState {
    records: Arc<dyn EntityRepository>,
    randoms: Arc<dyn RandomUserSource>,
}

//
// Map a use case failure to the appropriate response.
//
fn error_response(err: anyhow::Error) -> HttpResponse {
    match err.downcast_ref::<Error>() {
        Some(Error::UserNotFound(_)) => HttpResponse::NotFound()
            .json(json!({ "message": "no user record matches the given identifier" })),
        _ => {
            error!("request failed: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "message": err.to_string() }))
        }
    }
}

#[post("/users")]
async fn post_users(state: web::Data<AppState>, payload: web::Json<UserDraft>) -> HttpResponse {
    match validate_new_user(payload.into_inner()) {
        Ok(fields) => {
            let usecase = usecases::create_user::CreateUser::new(state.records.clone());
            let params = usecases::create_user::Params { fields };
            match usecase.call(params) {
                Ok(user) => HttpResponse::Ok().json(user),
                Err(err) => error_response(err),
            }
        }
        Err(errors) => HttpResponse::BadRequest().json(json!({ "errors": errors })),
    }
}

#[get("/users")]
async fn get_users(state: web::Data<AppState>) -> HttpResponse {
    let usecase = usecases::fetch_all_users::FetchAllUsers::new(state.records.clone());
    match usecase.call(NoParams {}) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(err) => error_response(err),
    }
}

#[get("/users/{id}")]
async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match validate_identifier(&path.into_inner()) {
        Ok(user_id) => {
            let usecase = usecases::fetch_user::FetchUser::new(state.records.clone());
            let params = usecases::fetch_user::Params { user_id };
            match usecase.call(params) {
                Ok(user) => HttpResponse::Ok().json(user),
                Err(err) => error_response(err),
            }
        }
        Err(errors) => HttpResponse::BadRequest().json(json!({ "errors": errors })),
    }
}

#[put("/users/{id}")]
async fn put_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UserDraft>,
) -> HttpResponse {
    // identifier syntax is not checked on the update path; a malformed
    // identifier surfaces as an internal failure
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(user_id) => user_id,
        Err(err) => {
            error!("failed to parse identifier: {:?}", err);
            return HttpResponse::InternalServerError().json(json!({ "message": err.to_string() }));
        }
    };
    match validate_user_patch(payload.into_inner()) {
        Ok(patch) => {
            let usecase = usecases::update_user::UpdateUser::new(state.records.clone());
            let params = usecases::update_user::Params { user_id, patch };
            match usecase.call(params) {
                Ok(outcome) => HttpResponse::Ok().json(outcome),
                Err(err) => error_response(err),
            }
        }
        Err(errors) => HttpResponse::BadRequest().json(json!({ "errors": errors })),
    }
}

#[delete("/users/{id}")]
async fn delete_user(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match validate_identifier(&path.into_inner()) {
        Ok(user_id) => {
            let usecase = usecases::remove_user::RemoveUser::new(state.records.clone());
            let params = usecases::remove_user::Params { user_id };
            match usecase.call(params) {
                Ok(true) => HttpResponse::Ok().json(json!({ "deleted_count": 1 })),
                Ok(false) => HttpResponse::NotFound()
                    .json(json!({ "message": "no user record matches the given identifier" })),
                Err(err) => error_response(err),
            }
        }
        Err(errors) => HttpResponse::BadRequest().json(json!({ "errors": errors })),
    }
}

#[delete("/users")]
async fn delete_users(state: web::Data<AppState>) -> HttpResponse {
    let usecase = usecases::purge_users::PurgeUsers::new(state.records.clone());
    match usecase.call(NoParams {}) {
        Ok(deleted) => HttpResponse::Ok().json(json!({ "deleted_count": deleted })),
        Err(err) => error_response(err),
    }
}

#[get("/randomUsers")]
async fn random_user(state: web::Data<AppState>) -> HttpResponse {
    match state.randoms.fetch_one().await {
        Ok(fields) => {
            let usecase = usecases::create_user::CreateUser::new(state.records.clone());
            let params = usecases::create_user::Params { fields };
            match usecase.call(params) {
                Ok(_) => HttpResponse::Ok().json(json!({ "message": "random user generated" })),
                Err(err) => error_response(err),
            }
        }
        Err(Error::ExternalStatus(code)) => {
            // answer with whatever status the external API gave us
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .json(json!({ "message": "failed to retrieve data from the external API" }))
        }
        Err(err) => {
            error!("random user fetch failed: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "message": err.to_string() }))
        }
    }
}

#[get("/randomUsers/{count}")]
async fn random_users(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let count = match path.into_inner().parse::<i64>() {
        Ok(count) if count > 0 => count as usize,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "message": "count must be a positive integer" }))
        }
    };
    // fan out all of the fetches at once, then wait for every one of them;
    // on the first failure the batch is abandoned and nothing is persisted,
    // though fetches already in flight run to completion
    let mut fetches = Vec::with_capacity(count);
    for _ in 0..count {
        let source = state.randoms.clone();
        fetches.push(rt::spawn(async move { source.fetch_one().await }));
    }
    let mut batch: Vec<UserFields> = Vec::with_capacity(count);
    for fetch in fetches {
        match fetch.await {
            Ok(Ok(fields)) => batch.push(fields),
            Ok(Err(err)) => {
                error!("random user fetch failed: {:?}", err);
                return HttpResponse::InternalServerError()
                    .json(json!({ "message": "internal server error" }));
            }
            Err(err) => {
                error!("random user task failed: {:?}", err);
                return HttpResponse::InternalServerError()
                    .json(json!({ "message": "internal server error" }));
            }
        }
    }
    let usecase = usecases::import_users::ImportUsers::new(state.records.clone());
    let params = usecases::import_users::Params { fields: batch };
    match usecase.call(params) {
        Ok(imported) => HttpResponse::Ok()
            .json(json!({ "message": format!("{} random users generated", imported) })),
        Err(err) => error_response(err),
    }
}

fn load_rustls_config() -> Result<ServerConfig, anyhow::Error> {
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();
    let cert_path = env::var("CERT_FILE").unwrap_or_else(|_| "certs/cert.pem".to_owned());
    let key_path = env::var("KEY_FILE").unwrap_or_else(|_| "certs/key.pem".to_owned());
    let cert_file = &mut BufReader::new(File::open(cert_path)?);
    let key_file = &mut BufReader::new(File::open(key_path)?);
    let cert_chain = certs(cert_file)?.into_iter().map(Certificate).collect();
    let mut keys: Vec<PrivateKey> = pkcs8_private_keys(key_file)?
        .into_iter()
        .map(PrivateKey)
        .collect();
    if keys.is_empty() {
        eprintln!("error: could not find PKCS 8 private keys");
        std::process::exit(1);
    }
    Ok(config.with_single_cert(cert_chain, keys.remove(0))?)
}

fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(post_users)
        .service(get_users)
        .service(get_user)
        .service(put_user)
        .service(delete_user)
        .service(delete_users)
        .service(random_user)
        .service(random_users);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let db_file = env::var("DB_FILE").unwrap_or_else(|_| "users.db3".to_owned());
    let datasource = build_data_source(DataSourceType::SqliteFile(db_file))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let records: Arc<dyn EntityRepository> = Arc::new(EntityRepositoryImpl::new(datasource));
    let endpoint =
        env::var("RANDOM_USER_URI").unwrap_or_else(|_| "https://randomuser.me/api/".to_owned());
    let randoms: Arc<dyn RandomUserSource> = Arc::new(RandomUserApi::new(endpoint));
    let state = web::Data::new(AppState { records, randoms });
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_owned());
    let addr = format!("{}:{}", host, port);
    let protocol = env::var("PROTOCOL").unwrap_or_else(|_| "http".to_owned());
    if protocol == "https" {
        let rustls_config =
            load_rustls_config().map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        info!("listening on https://{}/...", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .app_data(state.clone())
                .configure(config)
        })
        .bind_rustls(addr, rustls_config)?
        .run()
        .await
    } else {
        info!("listening on http://{}/...", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .app_data(state.clone())
                .configure(config)
        })
        .bind(addr)?
        .run()
        .await
    }
}
