//! Embedded static pages

/// Lookup form served at `/`
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Secret Santa</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <main>
        <h1>Secret Santa</h1>
        <p>Enter your name exactly as it appears on the list.</p>
        <form id="lookup" action="/query" method="get">
            <input id="name" name="name" type="text" autocomplete="off" required autofocus>
            <button type="submit">Who am I buying for?</button>
        </form>
        <p id="result" role="status"></p>
    </main>
    <script>
        const form = document.getElementById('lookup');
        const result = document.getElementById('result');

        form.addEventListener('submit', async (evt) => {
            evt.preventDefault();
            const name = document.getElementById('name').value.trim();
            result.className = '';
            result.textContent = '';
            if (!name) {
                return;
            }

            try {
                const res = await fetch('/query?name=' + encodeURIComponent(name));
                const body = await res.json();
                if (body.success) {
                    result.className = 'found';
                    result.textContent = body.data.giver + ', you are buying a gift for ' + body.data.giftee + '!';
                } else {
                    result.className = 'error';
                    result.textContent = body.error.message;
                }
            } catch (err) {
                result.className = 'error';
                result.textContent = 'Could not reach the server.';
            }
        });
    </script>
</body>
</html>
"#;

/// Stylesheet for the lookup form
pub const STYLE_CSS: &str = r#"
:root {
    --bg: #0f1a14;
    --fg: #f4f1ea;
    --accent: #c0392b;
    --ok: #27ae60;
}

body {
    margin: 0;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--bg);
    color: var(--fg);
    font-family: system-ui, -apple-system, sans-serif;
}

main {
    max-width: 28rem;
    padding: 2rem;
    text-align: center;
}

form {
    display: flex;
    gap: 0.5rem;
}

input {
    flex: 1;
    padding: 0.6rem;
    border: 1px solid #456;
    border-radius: 4px;
    font-size: 1rem;
}

button {
    padding: 0.6rem 1rem;
    border: none;
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    font-size: 1rem;
    cursor: pointer;
}

#result.found {
    color: var(--ok);
    font-weight: bold;
}

#result.error {
    color: var(--accent);
}
"#;
