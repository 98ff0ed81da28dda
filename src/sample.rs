//! Welcome text loaded when no file is given

pub const WELCOME: &str = r#"// Welcome to React Code Visualizer
import React, { useState, useEffect } from 'react';

const ExampleComponent = () => {
  const [count, setCount] = useState(0);
  const [isVisible, setIsVisible] = useState(true);

  // Effect hook for side effects
  useEffect(() => {
    document.title = `Count: ${count}`;
  }, [count]);

  const handleIncrement = () => {
    setCount(prev => prev + 1);
  };

  const handleDecrement = () => {
    setCount(prev => prev - 1);
  };

  return (
    <div className="container">
      <h1>Counter App</h1>
      {isVisible && (
        <div className="counter-display">
          <p>Current count: {count}</p>
          <button onClick={handleIncrement}>+</button>
          <button onClick={handleDecrement}>-</button>
        </div>
      )}
      <button onClick={() => setIsVisible(!isVisible)}>
        Toggle Visibility
      </button>
    </div>
  );
};

export default ExampleComponent;"#;
