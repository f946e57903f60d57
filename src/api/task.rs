//! Task Endpoints

use super::transport::{task_path, Body, Transport};
use crate::error::ApiResult;
use crate::models::{CreatedTaskResponse, MessageResponse, NewTask, Task, TaskPatch, TaskResponse, TasksResponse};

pub async fn my_tasks(transport: &Transport) -> ApiResult<Vec<Task>> {
    let response: TasksResponse = transport.get("/task/mytask").await?;
    Ok(response.tasks)
}

pub async fn create_task(transport: &Transport, new_task: &NewTask) -> ApiResult<CreatedTaskResponse> {
    transport.send("POST", "/task/post", Body::json(new_task)?).await
}

pub async fn update_task(transport: &Transport, id: &str, patch: &TaskPatch) -> ApiResult<Option<String>> {
    let response: MessageResponse = transport
        .send("PUT", &task_path("update", id), Body::json(patch)?)
        .await?;
    Ok(response.message)
}

pub async fn delete_task(transport: &Transport, id: &str) -> ApiResult<Option<String>> {
    let response: MessageResponse = transport
        .send("DELETE", &task_path("delete", id), Body::Empty)
        .await?;
    Ok(response.message)
}

pub async fn single_task(transport: &Transport, id: &str) -> ApiResult<Task> {
    let response: TaskResponse = transport.get(&task_path("single", id)).await?;
    Ok(response.task)
}
