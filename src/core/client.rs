use crate::core::codec;
use crate::domain::ports::{Operation, Transport};
use crate::domain::record::Record;
use crate::utils::error::Result;

/// Sends one request through `transport` and decodes the operation's result record.
pub async fn send<T, R>(transport: &T, request: &R) -> Result<R::Output>
where
    T: Transport + ?Sized,
    R: Operation,
{
    let payload = codec::to_value(request)?;
    tracing::debug!(
        "Invoking {} with fields {:?}",
        R::OPERATION_NAME,
        request.populated_fields()
    );

    let response = transport.invoke(R::OPERATION_NAME, payload).await?;
    let output: R::Output = codec::from_value(response)?;

    tracing::debug!(
        "{} returned {} with fields {:?}",
        R::OPERATION_NAME,
        <R::Output as Record>::TYPE_NAME,
        output.populated_fields()
    );
    Ok(output)
}
