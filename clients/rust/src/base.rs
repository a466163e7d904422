use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode {
        expected_status_code: StatusCode,
        status_code: StatusCode,
        message: String,
    },
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        res: reqwest::Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status_code = res.status();
        if status_code != expected_status_code {
            let message = res.text().await.unwrap_or_default();
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode {
                    expected_status_code,
                    status_code,
                    message,
                },
            });
        }

        res.json::<T>().await.map_err(|_| APIError {
            variant: APIErrorVariant::MalformedResponse,
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .get(format!("{}/{}", self.address, path))
            .send()
            .await
            .map_err(|_| APIError {
                variant: APIErrorVariant::Network,
            })?;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn post<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(format!("{}/{}", self.address, path))
            .json(&body)
            .send()
            .await
            .map_err(|_| APIError {
                variant: APIErrorVariant::Network,
            })?;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn put<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .put(format!("{}/{}", self.address, path))
            .json(&body)
            .send()
            .await
            .map_err(|_| APIError {
                variant: APIErrorVariant::Network,
            })?;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .delete(format!("{}/{}", self.address, path))
            .send()
            .await
            .map_err(|_| APIError {
                variant: APIErrorVariant::Network,
            })?;
        self.handle_response(res, expected_status_code).await
    }
}
