use crate::domain::logo::errors::COMMERCIAL_LICENSE_NOTICE;
use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "MOCK IDEA AI Service (Public)",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/analyze-logo": {
                "post": {
                    "summary": "Analyze Logo",
                    "description": "Public version with limited functionality. Full AI analysis requires a commercial license.",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/AnalyzeLogoRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/AnalyzeLogoResponse" }
                                }
                            }
                        },
                        "400": { "$ref": "#/components/responses/Error" },
                        "422": { "$ref": "#/components/responses/Error" },
                        "501": {
                            "description": COMMERCIAL_LICENSE_NOTICE,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ErrorDetail" }
                                }
                            }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health Check",
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HealthStatus" }
                                }
                            }
                        }
                    }
                }
            },
            "/openapi.json": { "get": { "summary": "OpenAPI document" } }
        },
        "components": {
            "schemas": {
                "AnalyzeLogoRequest": {
                    "type": "object",
                    "required": ["image", "colors"],
                    "properties": {
                        "image": { "type": "string" },
                        "colors": { "type": "array", "items": {} }
                    }
                },
                "AnalyzeLogoResponse": {
                    "type": "object",
                    "required": ["style", "complexity", "hasText", "recommendedCategories"],
                    "properties": {
                        "style": { "type": "string" },
                        "complexity": { "type": "integer" },
                        "hasText": { "type": "boolean" },
                        "recommendedCategories": { "type": "array", "items": { "type": "string" } }
                    }
                },
                "HealthStatus": {
                    "type": "object",
                    "required": ["status", "message"],
                    "properties": {
                        "status": { "type": "string" },
                        "message": { "type": "string" }
                    }
                },
                "ErrorDetail": {
                    "type": "object",
                    "required": ["detail"],
                    "properties": { "detail": { "type": "string" } }
                }
            },
            "responses": {
                "Error": {
                    "description": "Request rejected",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/ErrorDetail" }
                        }
                    }
                }
            }
        }
    }))
}
