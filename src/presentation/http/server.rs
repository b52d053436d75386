// src/presentation/http/server.rs
use axum::Router;
use std::{io, net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, signal};
use tokio_util::sync::CancellationToken;

/// Serve `router` until `shutdown` is cancelled.
///
/// Cancelling the token stops accepting connections and cancels every
/// in-flight request's context (they are child tokens). Requests then get
/// `grace` to drain before the server gives up on them.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    grace: Duration,
) -> io::Result<()> {
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    let stop = shutdown.clone();
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move { stop.cancelled().await });
    let server = std::future::IntoFuture::into_future(server);
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = shutdown.cancelled() => {}
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(grace_secs = grace.as_secs(), "graceful shutdown timed out");
            Ok(())
        }
    }
}

/// Cancel `shutdown` on CTRL+C or SIGTERM.
pub async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
        () = shutdown.cancelled() => return,
    }
    tracing::info!("shutdown signal received");
    shutdown.cancel();
}
