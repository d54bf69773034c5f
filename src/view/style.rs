// Page stylesheet, injected once by `mount`.

pub const STYLESHEET: &str = r#"
.ph-root {
  min-height: 100vh; width: 100%; display: flex; flex-direction: column;
  align-items: center; justify-content: center; padding: 16px; box-sizing: border-box;
  background: #fff; color: #18181b; font-family: system-ui, sans-serif;
}
.ph-header { width: 100%; max-width: 48rem; margin-bottom: 2rem; text-align: center; }
.ph-title { font-family: Georgia, serif; font-size: 2.2rem; font-weight: 400; margin: 0 0 .5rem; letter-spacing: -0.02em; }
.ph-hint { color: #a1a1aa; font-size: .75rem; letter-spacing: .2em; text-transform: uppercase; margin: 0; }

.ph-grid {
  display: grid; grid-template-columns: repeat(7, 1fr); grid-template-rows: repeat(6, 1fr);
  gap: 10px; width: 100%; max-width: 42rem; aspect-ratio: 7 / 6; padding: 16px; box-sizing: border-box;
}
.ph-empty { pointer-events: none; }
.ph-tile {
  position: relative; aspect-ratio: 1; padding: 0; border: 0; background: none;
  cursor: pointer; perspective: 1000px; transition: transform .2s ease;
}
.ph-tile:hover { transform: scale(1.05); }
.ph-tile:active { transform: scale(.95); }
.ph-flip {
  position: relative; width: 100%; height: 100%;
  transform-style: preserve-3d; transition: transform .7s ease;
}
.ph-tile.is-revealed .ph-flip { transform: rotateY(180deg); }
.ph-cover, .ph-face {
  position: absolute; inset: 0; border-radius: 2px; backface-visibility: hidden;
  box-shadow: 0 1px 2px rgba(0,0,0,.08);
}
.ph-cover { background: #18181b; border: 1px solid #27272a; }
.ph-face { background: #fff; overflow: hidden; transform: rotateY(180deg); }
.ph-face img {
  width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); transition: filter .5s ease;
}
.ph-face img:hover { filter: none; }

.ph-next {
  position: fixed; bottom: 2rem; right: 2rem; z-index: 40; display: none;
  align-items: center; gap: .75rem; padding: .75rem 2rem; border: 0; border-radius: 999px;
  background: #000; color: #fff; font-family: Georgia, serif; font-size: 1.1rem; cursor: pointer;
  box-shadow: 0 10px 25px rgba(0,0,0,.2);
}
.ph-next.is-visible { display: flex; animation: ph-slide-in .8s ease-out; }
.ph-next:hover { background: #27272a; }

.ph-detail {
  position: fixed; inset: 0; z-index: 60; display: none; align-items: center; justify-content: center;
  padding: 2rem; background: rgba(255,255,255,.9); backdrop-filter: blur(8px); cursor: zoom-out;
}
.ph-detail.is-open { display: flex; animation: ph-fade-in .3s ease; }
.ph-detail-panel {
  position: relative; max-width: 56rem; display: flex; flex-direction: column; align-items: center;
  padding: 8px; background: #fff; border-radius: 2px; box-shadow: 0 25px 50px rgba(0,0,0,.25); cursor: default;
}
.ph-media { max-width: 100%; max-height: 70vh; object-fit: contain; border-radius: 2px; }
.ph-detail-close {
  position: absolute; top: -3rem; right: 0; border: 0; background: none;
  font-size: 2rem; color: #27272a; cursor: pointer;
}
.ph-caption {
  margin: 1rem 1rem .5rem; max-width: 42rem; text-align: center;
  font-family: Georgia, serif; font-style: italic; font-size: 1.25rem; line-height: 1.6; color: #27272a;
}
.ph-caption.is-empty { display: none; }

.ph-letter {
  position: fixed; inset: 0; z-index: 50; display: none; align-items: center; justify-content: center;
  padding: 1rem; background: rgba(255,255,255,.8); backdrop-filter: blur(24px);
}
.ph-letter.is-open { display: flex; animation: ph-fade-in .4s ease; }
.ph-letter-card {
  width: 100%; max-width: 32rem; padding: 3.5rem; box-sizing: border-box; text-align: center;
  background: #fff; border: 1px solid #f4f4f5; box-shadow: 0 20px 40px -10px rgba(0,0,0,.1);
}
.ph-letter-heading { font-family: Georgia, serif; font-style: italic; font-size: 1.9rem; margin-bottom: 2rem; }
.ph-letter-body {
  min-height: 200px; max-height: 60vh; overflow-y: auto; padding: .5rem; text-align: left;
  white-space: pre-wrap; font-weight: 300; font-size: 1.15rem; line-height: 1.7; color: #52525b;
}
.ph-letter-close {
  margin-top: 2.5rem; border: 0; border-bottom: 1px solid transparent; background: none; padding-bottom: 4px;
  font-size: .75rem; letter-spacing: .2em; text-transform: uppercase; color: #a1a1aa; cursor: pointer;
}
.ph-letter-close:hover { color: #18181b; border-bottom-color: #18181b; }

@keyframes ph-fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes ph-slide-in { from { opacity: 0; transform: translateX(20px); } to { opacity: 1; transform: none; } }
"#;
